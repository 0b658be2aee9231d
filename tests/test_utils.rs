// ============================================================================
// Shared Test Utilities
// ============================================================================

use contact_gateway::config::{Config, LoggingConfig};
use contact_gateway::context::AppContext;
use contact_gateway::routes::create_router;
use std::sync::Arc;
use tokio::net::TcpListener;

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.address, path)
    }
}

/// Spawn the gateway on a random local port, pointed at the given relay
/// endpoint. Each call builds an isolated app with its own cooldown map.
pub async fn spawn_app(relay_url: String, cooldown_secs: u64) -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap().to_string();

    let config = Config {
        port: 0,
        relay_url,
        relay_timeout_secs: 5,
        cooldown_secs,
        rust_log: "info".to_string(),
        logging: LoggingConfig {
            hash_salt: "test-salt".to_string(),
        },
    };

    let app_context = Arc::new(AppContext::new(Arc::new(config)));
    let app = create_router(app_context);

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server crashed");
    });

    TestApp { address }
}
