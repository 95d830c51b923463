use proposta_client::FuncionarioClient;
use proposta_config::Config;
use proposta_server::{AppState, ServerError, build_router, logger};

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is normal outside development
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Ensure log directory exists
    let log_file_path = config.log_file_path()?;
    if let Some(log_dir) = log_file_path.as_deref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(log_dir).map_err(|e| ServerError::Directory {
            path: log_dir.display().to_string(),
            source: e,
        })?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        log_file_path.as_deref(),
        config.logging.colored,
    )?;

    info!("Starting proposta-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let pool = proposta_db::connect(&config.database_path()?).await?;
    proposta_db::run_migrations(&pool).await?;

    let employees = FuncionarioClient::new(&config.employee_service.base_url);
    info!("Employee service: {}", employees.base_url());

    let app_state = AppState::new(pool, config.validation.clone(), Arc::new(employees));
    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
