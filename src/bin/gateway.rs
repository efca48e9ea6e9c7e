use tower_http::{cors::CorsLayer, trace::TraceLayer};

use shareit::gateway::{
    client::ServerClient, config::Config, error::GatewayError, router, state::GatewayState,
};

#[tokio::main]
async fn main() -> Result<(), GatewayError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let client = ServerClient::new(config.server_url.clone())?;

    let app = router::router()
        .with_state(GatewayState::new(client))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.gateway_addr)
        .await
        .map_err(|e| {
            GatewayError::InternalError(format!("Failed to bind {}: {}", config.gateway_addr, e))
        })?;

    tracing::info!(
        "Starting ShareIt gateway on {}, forwarding to {}",
        config.gateway_addr,
        config.server_url
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| GatewayError::InternalError(format!("Server error: {}", e)))?;

    Ok(())
}
