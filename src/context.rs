use crate::config::Config;
use crate::limiter::CooldownLimiter;
use crate::relay::RelayClient;
use std::sync::Arc;

/// Application context containing shared dependencies
/// Handlers receive it as `State<Arc<AppContext>>`
pub struct AppContext {
    pub config: Arc<Config>,
    pub limiter: CooldownLimiter,
    pub relay: RelayClient,
}

impl AppContext {
    /// Creates a new application context from configuration
    pub fn new(config: Arc<Config>) -> Self {
        let limiter = CooldownLimiter::new(config.cooldown_window());
        let relay = RelayClient::new(config.relay_url.clone(), config.relay_timeout());

        Self {
            config,
            limiter,
            relay,
        }
    }
}
