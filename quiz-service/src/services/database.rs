use crate::models::QuestionRecord;
use crate::services::QuestionStore;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{ClientOptions, FindOptions},
    Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;
use validator::Validate;

pub const QUESTIONS_COLLECTION: &str = "questions";
const FALLBACK_DATABASE: &str = "test";

#[derive(Clone)]
pub struct MongoQuestionStore {
    client: MongoClient,
    db: Database,
}

impl MongoQuestionStore {
    /// Connects and pings the server. `database` overrides the database named
    /// in the URI; without either, `test` is used.
    pub async fn connect(uri: &str, database: Option<&str>) -> Result<Self, AppError> {
        tracing::info!("Connecting to MongoDB");
        let options = ClientOptions::parse(uri).await.map_err(|e| {
            tracing::error!("Invalid MongoDB connection string: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;

        let database = database
            .map(str::to_string)
            .or_else(|| options.default_database.clone())
            .unwrap_or_else(|| FALLBACK_DATABASE.to_string());

        let client = MongoClient::with_options(options).map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;
        let db = client.database(&database);

        let store = Self { client, db };
        store.health_check().await?;

        tracing::info!(database = %database, "Successfully connected to MongoDB!");
        Ok(store)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database_name(&self) -> &str {
        self.db.name()
    }

    pub fn questions(&self) -> Collection<QuestionRecord> {
        self.db.collection(QUESTIONS_COLLECTION)
    }
}

#[async_trait]
impl QuestionStore for MongoQuestionStore {
    async fn count(&self) -> Result<u64, AppError> {
        self.questions()
            .count_documents(doc! {}, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count questions: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })
    }

    async fn insert_many(&self, records: Vec<QuestionRecord>) -> Result<usize, AppError> {
        for record in &records {
            record.validate()?;
        }

        let result = self
            .questions()
            .insert_many(records, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert questions: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        Ok(result.inserted_ids.len())
    }

    async fn find_all(&self) -> Result<Vec<QuestionRecord>, AppError> {
        let find_options = FindOptions::builder().sort(doc! { "_id": 1 }).build();

        let cursor = self
            .questions()
            .find(doc! {}, find_options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to query questions: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to collect questions: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;
        Ok(())
    }
}
