//! Configuration loading.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CatalogConfig, Config, LoggingConfig, SourceConfig, DEFAULT_SOURCE_URL};
