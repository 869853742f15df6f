//! services/api/src/web/pages.rs
//!
//! Axum handlers for the server-rendered pages and the form/JSON create
//! endpoints. Create endpoints accept either an HTML form submission or a
//! JSON body; the store sees the same untyped draft either way.

use crate::web::state::AppState;
use crate::web::views::{self, Insights};
use axum::{
    extract::{Form, FromRequest, Request, State},
    http::{header, HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use focusdeck_core::{
    GoalDraft, SessionDraft, SessionRecord, SessionSummary, ValidationErrors,
};
use serde_json::json;
use tracing::{info, warn};

//=========================================================================================
// Page Handlers
//=========================================================================================

pub async fn get_home() -> Html<String> {
    Html(views::home_page())
}

pub async fn get_about() -> Html<String> {
    Html(views::about_page())
}

pub async fn get_focus(State(state): State<AppState>) -> Html<String> {
    let (sessions, summary) = {
        let store = state.sessions.lock().await;
        (store.list_sessions(), store.summary())
    };
    Html(views::focus_page(
        &sessions,
        &summary,
        &SessionDraft::default(),
        &ValidationErrors::new(),
    ))
}

pub async fn get_insights(State(state): State<AppState>) -> Html<String> {
    Html(
        render_insights(&state, &GoalDraft::default(), &ValidationErrors::new()).await,
    )
}

/// 404 fallback for any unrouted path.
pub async fn not_found(uri: Uri) -> (StatusCode, Html<String>) {
    info!(path = %uri.path(), "page not found");
    (
        StatusCode::NOT_FOUND,
        Html(views::error_page(
            "Page Not Found",
            "The page you are looking for does not exist.",
        )),
    )
}

//=========================================================================================
// Create Handlers (Form or JSON)
//=========================================================================================

/// `POST /focus/sessions`
///
/// A JSON caller gets `201 {ok, session}` or `422 {ok, errors}`. A form caller
/// is redirected back to `/focus` on success, or gets the focus page
/// re-rendered with inline errors and the submitted values preserved.
pub async fn create_session(State(state): State<AppState>, req: Request) -> Response {
    let wants_json = is_json(req.headers());

    let draft = if wants_json {
        match Json::<SessionDraft>::from_request(req, &()).await {
            Ok(Json(draft)) => draft,
            Err(rejection) => return rejection.into_response(),
        }
    } else {
        match Form::<SessionDraft>::from_request(req, &()).await {
            Ok(Form(draft)) => draft,
            Err(rejection) => return rejection.into_response(),
        }
    };

    let result = {
        let mut store = state.sessions.lock().await;
        store.add_session(&draft)
    };

    match result {
        Ok(record) => {
            info!(session_id = %record.id, "session queued");
            if wants_json {
                (
                    StatusCode::CREATED,
                    Json(json!({ "ok": true, "session": record })),
                )
                    .into_response()
            } else {
                Redirect::to("/focus").into_response()
            }
        }
        Err(errors) => {
            warn!(fields = errors.len(), "session rejected by validation");
            if wants_json {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "ok": false, "errors": errors })),
                )
                    .into_response()
            } else {
                let (sessions, summary) = {
                    let store = state.sessions.lock().await;
                    (store.list_sessions(), store.summary())
                };
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Html(views::focus_page(&sessions, &summary, &draft, &errors)),
                )
                    .into_response()
            }
        }
    }
}

/// `POST /focus/goals`: same contract as session creation, for goals.
pub async fn create_goal(State(state): State<AppState>, req: Request) -> Response {
    let wants_json = is_json(req.headers());

    let draft = if wants_json {
        match Json::<GoalDraft>::from_request(req, &()).await {
            Ok(Json(draft)) => draft,
            Err(rejection) => return rejection.into_response(),
        }
    } else {
        match Form::<GoalDraft>::from_request(req, &()).await {
            Ok(Form(draft)) => draft,
            Err(rejection) => return rejection.into_response(),
        }
    };

    let result = {
        let mut store = state.goals.lock().await;
        store.add_goal(&draft)
    };

    match result {
        Ok(record) => {
            info!(goal_id = %record.id, "goal planned");
            if wants_json {
                (
                    StatusCode::CREATED,
                    Json(json!({ "ok": true, "goal": record })),
                )
                    .into_response()
            } else {
                Redirect::to("/insights").into_response()
            }
        }
        Err(errors) => {
            warn!(fields = errors.len(), "goal rejected by validation");
            if wants_json {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "ok": false, "errors": errors })),
                )
                    .into_response()
            } else {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Html(render_insights(&state, &draft, &errors).await),
                )
                    .into_response()
            }
        }
    }
}

//=========================================================================================
// Helpers
//=========================================================================================

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.starts_with("application/json"))
        .unwrap_or(false)
}

async fn render_insights(
    state: &AppState,
    goal_values: &GoalDraft,
    goal_errors: &ValidationErrors,
) -> String {
    let (sessions, summary) = {
        let store = state.sessions.lock().await;
        (store.list_sessions(), store.summary())
    };
    let (goals, snapshot) = {
        let store = state.goals.lock().await;
        (store.list_goals(), store.snapshot())
    };

    let recent: Vec<SessionRecord> = sessions.into_iter().take(5).collect();
    let insights = build_insights(&summary, &recent);

    views::insights_page(
        &summary,
        &recent,
        &insights,
        &goals,
        &snapshot,
        goal_values,
        goal_errors,
    )
}

fn build_insights(summary: &SessionSummary, recent: &[SessionRecord]) -> Insights {
    let total = summary.total_focus_minutes;
    let total_focus_label = if total == 0 {
        "0 min".to_string()
    } else {
        let hours = total / 60;
        let minutes = total % 60;
        if hours > 0 {
            format!(
                "{} hr{} {} min",
                hours,
                if hours > 1 { "s" } else { "" },
                minutes
            )
        } else {
            format!("{} min", minutes)
        }
    };

    Insights {
        streak_days: recent.len().min(5),
        total_focus_label,
        latest_mood: recent
            .first()
            .map(|s| s.mood.clone())
            .unwrap_or_else(|| "Getting started".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(total_focus_minutes: u32) -> SessionSummary {
        SessionSummary {
            total_focus_minutes,
            total_cycles: 0,
            average_focus_block: 0,
        }
    }

    #[test]
    fn total_focus_label_formats_hours_and_minutes() {
        assert_eq!(build_insights(&summary(0), &[]).total_focus_label, "0 min");
        assert_eq!(
            build_insights(&summary(45), &[]).total_focus_label,
            "45 min"
        );
        assert_eq!(
            build_insights(&summary(60), &[]).total_focus_label,
            "1 hr 0 min"
        );
        assert_eq!(
            build_insights(&summary(200), &[]).total_focus_label,
            "3 hrs 20 min"
        );
    }

    #[test]
    fn latest_mood_falls_back_for_new_users() {
        let insights = build_insights(&summary(0), &[]);
        assert_eq!(insights.latest_mood, "Getting started");
        assert_eq!(insights.streak_days, 0);
    }
}
