use axum::http::HeaderMap;
use sha2::{Digest, Sha256};

/// Sentinel origin identifier used when no proxy header attributes the
/// caller. All such callers share one cooldown slot.
pub const UNKNOWN_ORIGIN: &str = "unknown";

/// Extract the caller's origin identifier from proxy headers.
///
/// Priority (first usable value wins):
/// 1. `x-forwarded-for` - first address in the chain, set by proxies/CDNs
/// 2. `x-real-ip` - set by nginx-style reverse proxies
/// 3. [`UNKNOWN_ORIGIN`] - nothing attributable
///
/// The result is only ever used as a cooldown-map key, so it stays the raw
/// string the proxy sent; it is never parsed as an address. Headers that are
/// not visible ASCII or carry a blank value are treated as absent.
pub fn extract_client_ip(headers: &HeaderMap) -> String {
    if let Some(forwarded) = headers.get("x-forwarded-for")
        && let Ok(forwarded) = forwarded.to_str()
    {
        let first = forwarded.split(',').next().map(str::trim).unwrap_or("");
        if !first.is_empty() {
            return first.to_string();
        }
    }

    if let Some(real_ip) = headers.get("x-real-ip")
        && let Ok(real_ip) = real_ip.to_str()
        && !real_ip.is_empty()
    {
        return real_ip.to_string();
    }

    UNKNOWN_ORIGIN.to_string()
}

/// Hash an identifier for privacy-safe logging.
///
/// Origin identifiers are client IP addresses and must not land in logs as
/// plain text. The salted SHA-256 prefix is stable enough to correlate log
/// lines for one origin without being reversible.
pub fn log_safe_id(id: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(id.as_bytes());
    let hash = hasher.finalize();

    // Take first 4 bytes and format each as hex
    hash[..4]
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<String>()
}
