use ih_server::logger;
use ih_server::routes::build_router;
use ih_server::state::AppState;

use std::error::Error;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = ih_config::Config::load()?;
    config.validate()?;

    // Construct log file path if a log directory is configured
    let config_dir = ih_config::Config::config_dir()?;
    let log_dir = config_dir.join(&config.logging.dir);
    std::fs::create_dir_all(&log_dir)?;
    let log_file_path = log_dir.join("ih-server.log");

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, Some(log_file_path))?;

    info!("Starting ih-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool and run migrations
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = ih_db::pool::connect(&database_path).await?;
    info!("Database ready");

    // validate() guarantees the secret is present
    let jwt_secret = config
        .auth
        .jwt_secret
        .as_ref()
        .ok_or("auth.jwt_secret missing after validation")?;

    let state = AppState::new(
        pool,
        jwt_secret.as_bytes(),
        chrono::Duration::hours(config.auth.token_ttl_hours),
    );

    // Build router
    let app = build_router(state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Shutdown complete");
    Ok(())
}
