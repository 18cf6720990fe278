pub mod app_config;
pub mod config;
pub mod jobs;
pub mod products;
pub mod variant;

use thiserror::Error;

pub use app_config::{AppConfig, Environment, Integration};
pub use config::{load_app_config, load_app_config_from_env};
pub use jobs::{JobStatus, ScrapingJob};
pub use products::{JobResult, MockProduct, ScrapeRequest};
pub use variant::JobVariant;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown job variant: {0}")]
    UnknownJobVariant(String),
}
