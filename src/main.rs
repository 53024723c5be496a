use tracing_subscriber::EnvFilter;

use admin_shell::client::BackendClient;
use admin_shell::config;
use admin_shell::handlers::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up ADMIN_SHELL_UPSTREAM_URL, ENABLE_ENTERPRISE, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting admin shell in {:?} mode", config.environment);
    tracing::info!(
        upstream = %config.upstream.base_url,
        enterprise = config.features.enterprise_enabled,
        cloud = config.features.cloud_enabled,
        "backend configuration"
    );

    let backend = BackendClient::new(&config.upstream)?;
    let mut app = handlers::router(AppState::new(backend, config.features));
    if config.server.enable_cors {
        app = app.layer(handlers::cors_layer(&config.server));
    }

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind {}: {}", bind_addr, e))?;

    tracing::info!("Admin shell listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
