use anyhow::Result;
use once_cell::sync::Lazy;
use prometheus::{
    Encoder, Histogram, IntCounter, TextEncoder, opts, register_histogram, register_int_counter,
};

pub static SUBMISSIONS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(opts!(
        "contact_gateway_submissions_total",
        "Total number of submission requests received"
    ))
    .unwrap()
});

pub static SUBMISSIONS_DENIED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(opts!(
        "contact_gateway_submissions_denied_total",
        "Submissions rejected by the per-origin cooldown"
    ))
    .unwrap()
});

pub static RELAY_FAILURES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(opts!(
        "contact_gateway_relay_failures_total",
        "Relay calls that failed at the transport level"
    ))
    .unwrap()
});

pub static RELAY_LATENCY_SECONDS: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "contact_gateway_relay_latency_seconds",
        "Histogram of relay round-trip times"
    )
    .unwrap()
});

pub fn gather_metrics() -> Result<String> {
    let mut buffer = vec![];
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    encoder.encode(&metric_families, &mut buffer)?;

    Ok(String::from_utf8(buffer)?)
}
