//! Application startup and lifecycle management.
//!
//! The listener is bound before the store is reachable. The store is
//! published to handlers only after the connection succeeds and the seed
//! attempt has finished; until then data routes answer 503.

use crate::config::{MongoConfig, QuizConfig};
use crate::handlers;
use crate::services::{seed_if_empty, MongoQuestionStore, QuestionStore, SeedOutcome};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{metrics_middleware, request_id_middleware};
use std::net::SocketAddr;
use std::sync::{Arc, OnceLock};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared application state.
#[derive(Clone, Default)]
pub struct AppState {
    store: Arc<OnceLock<Arc<dyn QuestionStore>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The published store, or `ServiceUnavailable` while startup is pending.
    pub fn store(&self) -> Result<Arc<dyn QuestionStore>, AppError> {
        self.store.get().cloned().ok_or(AppError::ServiceUnavailable)
    }

    fn publish(&self, store: Arc<dyn QuestionStore>) {
        if self.store.set(store).is_err() {
            tracing::warn!("Question store already published; ignoring second store");
        }
    }
}

/// Seeds the store if needed, then makes it visible to request handlers.
pub async fn bring_online(state: &AppState, store: Arc<dyn QuestionStore>) -> SeedOutcome {
    let outcome = seed_if_empty(store.as_ref()).await;
    state.publish(store);
    outcome
}

/// Connects to MongoDB and brings the store online. Failures are logged and
/// leave the service without a store until restart.
pub async fn connect_store(state: AppState, mongodb: MongoConfig) {
    let Some(uri) = mongodb.uri else {
        tracing::error!("Connection error: MONGO_URI is not set");
        return;
    };

    match MongoQuestionStore::connect(&uri, mongodb.database.as_deref()).await {
        Ok(store) => {
            bring_online(&state, Arc::new(store)).await;
        }
        Err(e) => tracing::error!(error = %e, "Connection error"),
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route("/api/questions", get(handlers::list_questions))
        .route("/api/submit", post(handlers::submit_answers))
        .route_layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Bind the listener and connect to MongoDB in the background.
    pub async fn build(config: QuizConfig) -> Result<Self, AppError> {
        let state = AppState::new();
        tokio::spawn(connect_store(state.clone(), config.mongodb.clone()));
        Self::bind(&config, state).await
    }

    /// Use an already constructed store. Seeding completes before this
    /// returns.
    pub async fn build_with_store(
        config: QuizConfig,
        store: Arc<dyn QuestionStore>,
    ) -> Result<Self, AppError> {
        let state = AppState::new();
        bring_online(&state, store).await;
        Self::bind(&config, state).await
    }

    async fn bind(config: &QuizConfig, state: AppState) -> Result<Self, AppError> {
        // Port 0 picks a random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Server is running on http://localhost:{}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, router(self.state))
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
