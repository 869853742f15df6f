//! services/api/src/web/api.rs
//!
//! Contains the Axum handlers for the JSON API endpoints and the master
//! definition for the OpenAPI specification.

use crate::web::state::AppState;
use axum::{extract::State, response::Json};
use focusdeck_core::{GoalRecord, GoalSnapshot, SessionRecord, SessionSummary};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        list_sessions_handler,
        list_goals_handler,
    ),
    components(
        schemas(SessionsResponse, GoalsResponse)
    ),
    tags(
        (name = "FocusDeck API", description = "JSON endpoints for focus sessions and goals.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Response Structs
//=========================================================================================

/// The session list together with its derived summary, serialized exactly as
/// the store produced them.
#[derive(Serialize, ToSchema)]
pub struct SessionsResponse {
    #[schema(value_type = Vec<Object>)]
    pub sessions: Vec<SessionRecord>,
    #[schema(value_type = Object)]
    pub summary: SessionSummary,
}

/// The goal list together with its dashboard snapshot.
#[derive(Serialize, ToSchema)]
pub struct GoalsResponse {
    #[schema(value_type = Vec<Object>)]
    pub goals: Vec<GoalRecord>,
    #[schema(value_type = Object)]
    pub snapshot: GoalSnapshot,
}

//=========================================================================================
// JSON API Handlers
//=========================================================================================

/// List every queued session with aggregate statistics.
#[utoipa::path(
    get,
    path = "/api/sessions",
    responses(
        (status = 200, description = "Sessions ordered most recent first, plus totals", body = SessionsResponse)
    )
)]
pub async fn list_sessions_handler(State(state): State<AppState>) -> Json<SessionsResponse> {
    let store = state.sessions.lock().await;
    Json(SessionsResponse {
        sessions: store.list_sessions(),
        summary: store.summary(),
    })
}

/// List every planned goal with the dashboard snapshot.
#[utoipa::path(
    get,
    path = "/api/goals",
    responses(
        (status = 200, description = "Goals ordered soonest deadline first, plus snapshot", body = GoalsResponse)
    )
)]
pub async fn list_goals_handler(State(state): State<AppState>) -> Json<GoalsResponse> {
    let store = state.goals.lock().await;
    Json(GoalsResponse {
        goals: store.list_goals(),
        snapshot: store.snapshot(),
    })
}
