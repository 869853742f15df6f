pub mod api;
pub mod pages;
pub mod state;
pub mod views;

use axum::{
    routing::{get, post},
    Router,
};
use state::AppState;
use tower_http::trace::TraceLayer;

// Re-export the pieces the binaries need to build the server.
pub use api::{list_goals_handler, list_sessions_handler, ApiDoc};
pub use pages::{create_goal, create_session};

/// Builds the application router: page routes, create endpoints, and the JSON
/// API, all sharing one [`AppState`].
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::get_home))
        .route("/about", get(pages::get_about))
        .route("/focus", get(pages::get_focus))
        .route("/insights", get(pages::get_insights))
        .route("/focus/sessions", post(pages::create_session))
        .route("/focus/goals", post(pages::create_goal))
        .route("/api/sessions", get(api::list_sessions_handler))
        .route("/api/goals", get(api::list_goals_handler))
        .fallback(pages::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
