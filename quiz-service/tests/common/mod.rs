#![allow(dead_code)]

use quiz_service::config::{MongoConfig, QuizConfig};
use quiz_service::services::{InMemoryQuestionStore, QuestionStore};
use quiz_service::startup::Application;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: Option<Arc<InMemoryQuestionStore>>,
}

pub fn test_config(mongodb: MongoConfig) -> QuizConfig {
    QuizConfig {
        common: CoreConfig::default(),
        port: 0, // Random port for testing
        mongodb,
    }
}

impl TestApp {
    /// Spawn against a fresh in-memory store; seeding has finished on return.
    pub async fn spawn() -> Self {
        Self::spawn_with_store(Arc::new(InMemoryQuestionStore::new())).await
    }

    pub async fn spawn_with_store(store: Arc<InMemoryQuestionStore>) -> Self {
        let config = test_config(MongoConfig {
            uri: None,
            database: None,
        });

        let app = Application::build_with_store(config, store.clone() as Arc<dyn QuestionStore>)
            .await
            .expect("Failed to build test application");

        let mut test_app = Self::start(app).await;
        test_app.store = Some(store);
        test_app
    }

    /// Spawn with no MongoDB URI configured: the store never comes online.
    pub async fn spawn_without_store() -> Self {
        let config = test_config(MongoConfig {
            uri: None,
            database: None,
        });

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        Self::start(app).await
    }

    pub async fn spawn_with_config(config: QuizConfig) -> Self {
        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        Self::start(app).await
    }

    async fn start(app: Application) -> Self {
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        for _ in 0..50 {
            if client.get(&address).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            store: None,
        }
    }

    pub fn store(&self) -> &InMemoryQuestionStore {
        self.store
            .as_deref()
            .expect("test app was spawned without an in-memory store")
    }
}
