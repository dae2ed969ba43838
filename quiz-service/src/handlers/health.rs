use crate::services::get_metrics;
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub const GREETING: &str = "Hello World! Our server is working";

/// Liveness greeting; never touches the store.
pub async fn root() -> &'static str {
    GREETING
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let store = match state.store() {
        Ok(store) => store,
        Err(_) => {
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "starting",
                    "service": "quiz-service",
                    "version": env!("CARGO_PKG_VERSION")
                })),
            )
        }
    };

    match store.health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "service": "quiz-service",
                "version": env!("CARGO_PKG_VERSION")
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "unhealthy",
                "service": "quiz-service",
                "error": e.to_string()
            })),
        ),
    }
}

pub async fn readiness_check(State(state): State<AppState>) -> StatusCode {
    let Ok(store) = state.store() else {
        return StatusCode::SERVICE_UNAVAILABLE;
    };
    match store.health_check().await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}
