//! HTTP handlers for quiz-service.

pub mod health;
pub mod questions;
pub mod submit;

pub use health::{health_check, metrics_endpoint, readiness_check, root};
pub use questions::list_questions;
pub use submit::submit_answers;
