use crate::models::QuestionRecord;
use crate::services::QuestionStore;
use async_trait::async_trait;
use service_core::error::AppError;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;
use validator::Validate;

/// Process-local store with the same validation rules as MongoDB.
#[derive(Default)]
pub struct InMemoryQuestionStore {
    records: RwLock<Vec<QuestionRecord>>,
    insert_batches: AtomicUsize,
    failing: AtomicBool,
}

impl InMemoryQuestionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail with a database error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of successful `insert_many` calls.
    pub fn insert_batches(&self) -> usize {
        self.insert_batches.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError(anyhow::anyhow!(
                "in-memory store unavailable"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl QuestionStore for InMemoryQuestionStore {
    async fn count(&self) -> Result<u64, AppError> {
        self.check_available()?;
        Ok(self.records.read().await.len() as u64)
    }

    async fn insert_many(&self, records: Vec<QuestionRecord>) -> Result<usize, AppError> {
        self.check_available()?;
        for record in &records {
            record.validate()?;
        }

        let mut stored = self.records.write().await;
        let inserted = records.len();
        stored.extend(records.into_iter().map(|mut record| {
            record.ensure_id();
            record
        }));
        self.insert_batches.fetch_add(1, Ordering::SeqCst);
        Ok(inserted)
    }

    async fn find_all(&self) -> Result<Vec<QuestionRecord>, AppError> {
        self.check_available()?;
        Ok(self.records.read().await.clone())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.check_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    fn record(question: &str) -> QuestionRecord {
        QuestionRecord::new(question, &["Yes", "No"], "Yes", Difficulty::Medium)
    }

    #[tokio::test]
    async fn insert_assigns_ids_and_keeps_order() {
        let store = InMemoryQuestionStore::new();
        let inserted = store
            .insert_many(vec![record("First question?"), record("Second question?")])
            .await
            .unwrap();

        assert_eq!(inserted, 2);
        let all = store.find_all().await.unwrap();
        assert_eq!(all[0].question, "First question?");
        assert_eq!(all[1].question, "Second question?");
        assert!(all.iter().all(|r| r.id.is_some()));
        assert_ne!(all[0].id, all[1].id);
    }

    #[tokio::test]
    async fn invalid_record_rejects_whole_batch() {
        let store = InMemoryQuestionStore::new();
        let mut bad = record("Valid length question?");
        bad.answers = vec!["Only one".into()];

        let result = store
            .insert_many(vec![record("A perfectly fine one?"), bad])
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert_eq!(store.count().await.unwrap(), 0);
        assert_eq!(store.insert_batches(), 0);
    }

    #[tokio::test]
    async fn duplicates_are_allowed() {
        let store = InMemoryQuestionStore::new();
        store
            .insert_many(vec![record("Same question?"), record("Same question?")])
            .await
            .unwrap();

        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn failing_store_reports_database_error() {
        let store = InMemoryQuestionStore::new();
        store.set_failing(true);

        assert!(matches!(
            store.find_all().await,
            Err(AppError::DatabaseError(_))
        ));
        assert!(store.health_check().await.is_err());
    }
}
