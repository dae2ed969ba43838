use quiz_service::config::QuizConfig;
use quiz_service::services::init_metrics;
use quiz_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = QuizConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_tracing(
        "quiz-service",
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    );

    // Must run before any metrics are recorded
    init_metrics();

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to start application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
