pub mod config;
pub mod context;
pub mod error;
pub mod limiter;
pub mod metrics;
pub mod relay;
pub mod routes;
pub mod utils;
