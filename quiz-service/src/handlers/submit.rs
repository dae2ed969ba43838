use crate::services::metrics::record_submission;
use axum::{body::Bytes, Json};
use serde::Serialize;
use serde_json::Value;

pub const SUBMISSION_ACK: &str = "Submission received successfully";

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub message: &'static str,
}

/// Logs whatever was submitted and acknowledges it. Nothing is scored or
/// stored, and no body (or content type) is ever refused.
pub async fn submit_answers(body: Bytes) -> Json<SubmitResponse> {
    match serde_json::from_slice::<Value>(&body) {
        Ok(payload) => tracing::info!(submission = %payload, "Received a Submission!"),
        Err(_) => tracing::info!(
            submission = %String::from_utf8_lossy(&body),
            "Received a Submission!"
        ),
    }
    record_submission();

    Json(SubmitResponse {
        message: SUBMISSION_ACK,
    })
}
