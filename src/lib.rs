pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{http::router, numbers_api::NumbersApiLookup};
pub use crate::config::{toml_config::TomlConfig, ServerConfig};
pub use crate::core::classifier::NumberClassifier;
pub use crate::domain::model::{ClassificationError, ClassificationResponse, FUN_FACT_FALLBACK};
pub use crate::domain::ports::{ConfigProvider, TriviaLookup};
pub use crate::utils::error::{Result, ServiceError};
