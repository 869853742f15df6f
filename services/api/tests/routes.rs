//! services/api/tests/routes.rs
//!
//! Router-level tests exercising the page routes, the form and JSON create
//! flows, and the JSON API, via `tower::ServiceExt::oneshot`.

use api_lib::config::Config;
use api_lib::web::{build_router, state::AppState};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app(seed_demo_data: bool) -> Router {
    let config = Config {
        seed_demo_data,
        ..Config::default()
    };
    build_router(AppState::from_config(config))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    serde_json::from_slice(&bytes).expect("valid JSON body")
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

#[tokio::test]
async fn pages_render() {
    for path in ["/", "/about", "/focus", "/insights"] {
        let response = app(true)
            .oneshot(Request::get(path).body(Body::empty()).expect("request"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK, "GET {path}");

        let html = body_text(response).await;
        assert!(html.contains("<!DOCTYPE html>"), "GET {path} renders HTML");
    }
}

#[tokio::test]
async fn unknown_path_renders_404_page() {
    let response = app(true)
        .oneshot(Request::get("/nope").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Page Not Found"));
}

#[tokio::test]
async fn api_sessions_returns_store_output_verbatim() {
    let response = app(true)
        .oneshot(
            Request::get("/api/sessions")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let sessions = body["sessions"].as_array().expect("sessions array");
    assert_eq!(sessions.len(), 3);
    // Seeded sessions: 25×4 + 25×3 + 50×2 focus minutes over 9 cycles.
    assert_eq!(body["summary"]["totalFocusMinutes"], 275);
    assert_eq!(body["summary"]["totalCycles"], 9);
    assert_eq!(body["summary"]["averageFocusBlock"], 31);
    // Most recent seed first.
    assert_eq!(sessions[0]["title"], "Capstone Planning");
}

#[tokio::test]
async fn api_goals_returns_snapshot() {
    let response = app(true)
        .oneshot(
            Request::get("/api/goals")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["goals"].as_array().expect("goals array").len(), 2);
    assert_eq!(body["snapshot"]["total"], 2);
    assert_eq!(body["snapshot"]["highPriority"], 1);
    let label = body["snapshot"]["nextDueLabel"].as_str().expect("label");
    assert!(label.starts_with("Finish algorithms worksheet · due "));
}

#[tokio::test]
async fn empty_store_summary_is_zero() {
    let response = app(false)
        .oneshot(
            Request::get("/api/sessions")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    let body = body_json(response).await;
    assert_eq!(body["sessions"].as_array().expect("sessions array").len(), 0);
    assert_eq!(body["summary"]["totalFocusMinutes"], 0);
    assert_eq!(body["summary"]["totalCycles"], 0);
    assert_eq!(body["summary"]["averageFocusBlock"], 0);
}

#[tokio::test]
async fn json_session_create_round_trips_through_the_store() {
    let app = app(false);

    let response = app
        .clone()
        .oneshot(
            Request::post("/focus/sessions")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "title": "Evening review",
                        "focusMinutes": 25,
                        "breakMinutes": "5",
                        "cycles": 4,
                        "mood": "Calm"
                    })
                    .to_string(),
                ))
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["ok"], true);
    let id = body["session"]["id"].as_str().expect("id").to_string();

    let listed = app
        .oneshot(
            Request::get("/api/sessions")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    let listed = body_json(listed).await;
    let ids: Vec<&str> = listed["sessions"]
        .as_array()
        .expect("sessions array")
        .iter()
        .filter_map(|s| s["id"].as_str())
        .collect();
    assert!(ids.contains(&id.as_str()));
}

#[tokio::test]
async fn json_session_create_reports_field_errors() {
    let response = app(false)
        .oneshot(
            Request::post("/focus/sessions")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "title": "Too ambitious",
                        "focusMinutes": 500,
                        "breakMinutes": 5,
                        "cycles": 4
                    })
                    .to_string(),
                ))
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["ok"], false);
    assert_eq!(
        body["errors"]["focusMinutes"],
        "Focus minutes should be between 10 and 90."
    );
}

#[tokio::test]
async fn form_session_create_redirects_on_success() {
    let response = app(false)
        .oneshot(
            Request::post("/focus/sessions")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(
                    "title=Morning+sprint&focusMinutes=25&breakMinutes=5&cycles=4&mood=Fresh",
                ))
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("/focus")
    );
}

#[tokio::test]
async fn form_session_create_re_renders_with_errors() {
    let response = app(false)
        .oneshot(
            Request::post("/focus/sessions")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(
                    "title=&focusMinutes=abc&breakMinutes=5&cycles=4&mood=",
                ))
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_text(response).await;
    assert!(html.contains("Give this session a descriptive name."));
    assert!(html.contains("Focus minutes should be between 10 and 90."));
    // Submitted values are preserved for correction.
    assert!(html.contains("value=\"abc\""));
}

#[tokio::test]
async fn form_goal_create_redirects_to_insights() {
    let response = app(false)
        .oneshot(
            Request::post("/focus/goals")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(
                    "title=Ship+the+draft&targetFocusMinutes=120&priority=High&dueDate=2026-09-15&setReminder=on&notes=",
                ))
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("/insights")
    );
}

#[tokio::test]
async fn json_goal_create_reports_field_errors() {
    let response = app(false)
        .oneshot(
            Request::post("/focus/goals")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "title": "Vague plan",
                        "targetFocusMinutes": 120,
                        "priority": "Urgent",
                        "dueDate": ""
                    })
                    .to_string(),
                ))
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["ok"], false);
    assert_eq!(
        body["errors"]["priority"],
        "Pick one of the listed priority levels."
    );
    assert_eq!(body["errors"]["dueDate"], "Choose a deadline for this goal.");
}
