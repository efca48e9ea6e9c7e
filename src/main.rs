use tower_http::{cors::CorsLayer, trace::TraceLayer};

use shareit::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let app = router::router()
        .with_state(AppState::new(db))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.server_addr)
        .await
        .map_err(|e| {
            AppError::InternalError(format!("Failed to bind {}: {}", config.server_addr, e))
        })?;

    tracing::info!("Starting ShareIt server on {}", config.server_addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    Ok(())
}
