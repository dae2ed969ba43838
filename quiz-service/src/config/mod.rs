use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// The HTTP port is fixed; only tests change it (to 0).
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Deserialize)]
pub struct QuizConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub port: u16,
    pub mongodb: MongoConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    /// A missing URI is not a startup error; the store connector reports it.
    pub uri: Option<String>,
    pub database: Option<String>,
}

impl QuizConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        Ok(QuizConfig {
            common: common_config,
            port: DEFAULT_PORT,
            mongodb: MongoConfig {
                uri: get_env("MONGO_URI"),
                database: get_env("MONGO_DATABASE"),
            },
        })
    }
}

fn get_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
