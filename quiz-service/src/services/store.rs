use crate::models::QuestionRecord;
use async_trait::async_trait;
use service_core::error::AppError;

/// Persistence seam for question records.
///
/// `insert_many` validates every record before writing anything; a single
/// invalid record rejects the whole batch.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    async fn count(&self) -> Result<u64, AppError>;
    async fn insert_many(&self, records: Vec<QuestionRecord>) -> Result<usize, AppError>;
    async fn find_all(&self) -> Result<Vec<QuestionRecord>, AppError>;
    async fn health_check(&self) -> Result<(), AppError>;
}
