mod model;
mod server;

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::server::{
    config::Config, error::AppError, logs, router, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    logs::setup_logging();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::seed_default_players(&db).await?;

    let app = router::router()
        .with_state(AppState::new(db))
        .layer(router::cors_layer())
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(config.bind_address).await?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(err) => tracing::error!("Failed to listen for shutdown signal: {}", err),
    }
}
