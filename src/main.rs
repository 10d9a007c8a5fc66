use std::net::SocketAddr;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use parking_management::build_app;
use parking_management::config::environment::EnvironmentConfig;
use parking_management::routes::API_PREFIX;
use parking_management::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = EnvironmentConfig::from_env()?;
    info!(
        "Parking management starting ({} environment, storage at {})",
        config.environment,
        config.storage_path.display()
    );

    if config.is_production() && config.cors_origins.is_empty() {
        warn!("CORS_ORIGINS is empty: accepting requests from any origin");
    }

    let addr: SocketAddr = config.server_url().parse()?;
    let app = build_app(AppState::new(config));

    info!("Listening on http://{}{}", addr, API_PREFIX);
    info!("   POST {}/parking-in", API_PREFIX);
    info!("   POST {}/parking-out", API_PREFIX);
    info!("   GET  {}/parking-data/plates?color=", API_PREFIX);
    info!("   GET  {}/parking-data/count?type=", API_PREFIX);
    info!("   CRUD {}/parking-lots", API_PREFIX);
    info!("   CRUD {}/vehicles", API_PREFIX);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("Server error: {}", e);
            e
        })?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Ctrl+C received, shutting down"),
        _ = terminate => info!("SIGTERM received, shutting down"),
    }
}
