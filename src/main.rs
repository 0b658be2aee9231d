// ============================================================================
// Contact Gateway Service
// ============================================================================
//
// Single entry point for website contact-form submissions. It handles:
// - Origin identification from proxy headers
// - Per-origin submission cooldown (in-memory, best-effort)
// - Forwarding accepted submissions to the external form relay
// - Translating the relay's verdict back to the browser
//
// There is no persistence: the cooldown map is rebuilt empty on restart.
//
// ============================================================================

use anyhow::{Context, Result};
use contact_gateway::config::Config;
use contact_gateway::context::AppContext;
use contact_gateway::routes::create_router;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;
    let config = Arc::new(config);

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.rust_log.clone()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("=== Contact Gateway Starting ===");
    info!("Port: {}", config.port);
    info!("Relay endpoint: {}", config.relay_url);
    info!("Submission cooldown: {}s", config.cooldown_secs);

    // Initialize shared state
    let app_context = Arc::new(AppContext::new(config.clone()));

    // Create router
    let app = create_router(app_context);

    // Start server
    let addr: SocketAddr = format!("0.0.0.0:{}", config.port)
        .parse()
        .context("Failed to parse bind address")?;

    info!("Contact gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .await
        .context("Failed to start server")?;

    Ok(())
}
