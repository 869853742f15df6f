//! services/api/src/bin/api.rs

use api_lib::{
    config::Config,
    error::ApiError,
    web::{build_router, state::AppState, ApiDoc},
};
use axum::Router;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Build the Shared AppState ---
    // State is in-memory only; every start reconstructs it from the seed list
    // (or empty, when seeding is disabled).
    if config.seed_demo_data {
        info!("Seeding stores with demo sessions and goals");
    }
    let bind_address = config.bind_address;
    let state = AppState::from_config(config);

    // --- 3. Create the Web Router ---
    let app = Router::new()
        .merge(build_router(state))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // --- 4. Start the Server ---
    info!("Starting server on {}", bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        bind_address
    );
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
