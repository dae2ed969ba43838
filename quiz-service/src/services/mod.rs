pub mod database;
pub mod memory;
pub mod metrics;
pub mod seed;
pub mod store;

pub use database::MongoQuestionStore;
pub use memory::InMemoryQuestionStore;
pub use metrics::{get_metrics, init_metrics};
pub use seed::{catalog, seed_if_empty, SeedOutcome};
pub use store::QuestionStore;
