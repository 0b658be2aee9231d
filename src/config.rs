// ============================================================================
// Configuration
// ============================================================================
//
// All settings come from environment variables (and an optional .env file),
// with working defaults for local development. The gateway holds no
// secrets: the relay access key travels inside the submitted form.
//
// ============================================================================

use anyhow::{Result, bail};
use std::time::Duration;

// ===== Server Defaults =====
const DEFAULT_PORT: u16 = 8080;

// ===== Relay Defaults =====
/// Web3Forms-compatible submission endpoint.
const DEFAULT_RELAY_URL: &str = "https://api.web3forms.com/submit";
/// Hard ceiling on one relay round-trip, so a stalled relay cannot pin
/// request handlers open indefinitely.
const DEFAULT_RELAY_TIMEOUT_SECS: u64 = 10;

// ===== Rate Limiting Defaults =====
/// Cooldown between accepted submissions from one origin (2 minutes).
const DEFAULT_COOLDOWN_SECS: u64 = 120;

// ===== Request Limits =====
/// Upper bound for an inbound submission body. Contact forms are text-only;
/// anything larger than this is junk.
pub const MAX_SUBMISSION_BODY_SIZE: usize = 64 * 1024;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Salt for hashing origin identifiers in log output
    pub hash_salt: String,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Relay endpoint accepted submissions are forwarded to
    pub relay_url: String,
    pub relay_timeout_secs: u64,
    /// Seconds one origin must wait between accepted submissions
    pub cooldown_secs: u64,
    pub rust_log: String,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let relay_url =
            std::env::var("RELAY_URL").unwrap_or_else(|_| DEFAULT_RELAY_URL.to_string());
        if relay_url.is_empty() {
            bail!("RELAY_URL must not be empty");
        }

        Ok(Config {
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            relay_url,
            relay_timeout_secs: std::env::var("RELAY_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_RELAY_TIMEOUT_SECS),
            cooldown_secs: std::env::var("SUBMISSION_COOLDOWN_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_COOLDOWN_SECS),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            logging: LoggingConfig {
                // Development default; set LOG_HASH_SALT in production so
                // hashed origins cannot be recomputed from public code.
                hash_salt: std::env::var("LOG_HASH_SALT")
                    .unwrap_or_else(|_| "contact-gateway-dev-salt".to_string()),
            },
        })
    }

    /// Cooldown window as a `Duration`.
    pub fn cooldown_window(&self) -> Duration {
        Duration::from_secs(self.cooldown_secs)
    }

    /// Relay request timeout as a `Duration`.
    pub fn relay_timeout(&self) -> Duration {
        Duration::from_secs(self.relay_timeout_secs)
    }
}
