//! Shared types and configuration for the gunworks catalog sync.

pub mod app_config;
pub mod config;
pub mod mapping;
pub mod products;
pub mod record;

pub use app_config::{ApiCredentials, AppConfig, FeedSource};
pub use config::{load_app_config, load_app_config_from_env};
pub use mapping::{load_category_mapping, CategoryMapping, MappingEntry};
pub use products::{Category, GrainBucket, NormalizedProduct, ParseCategoryError};
pub use record::VendorRecord;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read category mapping at {path}: {source}")]
    MappingFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse category mapping at {path}: {reason}")]
    MappingFileParse { path: String, reason: String },

    #[error("config validation error: {0}")]
    Validation(String),
}
