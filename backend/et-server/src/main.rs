use et_config::Config;
use et_db::Database;
use et_server::{AppState, build_router, logger};

use std::error::Error;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Ensure the log directory exists when logging to a file
    let log_file_path = config.log_file_path()?;
    if let Some(parent) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(parent)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting et-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Open the database; migrations run on connect
    let database_url = config.database_url()?;
    info!("Connecting to database: {}", database_url);
    let database = Database::connect(&database_url, config.database.max_connections).await?;

    let app = build_router(AppState::new(database.clone(), config.assets.clone()));

    let listener = TcpListener::bind(config.bind_addr()).await?;
    let actual_addr = listener.local_addr()?;
    info!("Your app is listening on port {}", actual_addr.port());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    database.close().await;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
