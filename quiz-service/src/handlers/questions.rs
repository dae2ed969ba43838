use crate::models::QuestionRecord;
use crate::services::metrics::record_questions_served;
use crate::startup::AppState;
use axum::{extract::State, Json};
use mongodb::bson::Bson;
use serde::Serialize;
use service_core::error::AppError;

/// Wire shape of a question: an ObjectId is rendered as a hex string, any
/// other id as its plain value.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub question: String,
    pub answers: Vec<String>,
    pub correct_answer: String,
    pub difficulty: String,
}

impl From<QuestionRecord> for QuestionResponse {
    fn from(record: QuestionRecord) -> Self {
        Self {
            id: record.id.map(|id| match id {
                Bson::ObjectId(oid) => oid.to_hex(),
                Bson::String(s) => s,
                other => other.to_string(),
            }),
            question: record.question,
            answers: record.answers,
            correct_answer: record.correct_answer,
            difficulty: record.difficulty,
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn list_questions(
    State(state): State<AppState>,
) -> Result<Json<Vec<QuestionResponse>>, AppError> {
    let store = state.store()?;

    let records = store.find_all().await.map_err(|e| {
        tracing::error!(error = %e, "Error fetching questions");
        AppError::InternalError(anyhow::anyhow!("Failed to fetch questions"))
    })?;

    record_questions_served(records.len());
    Ok(Json(records.into_iter().map(QuestionResponse::from).collect()))
}
