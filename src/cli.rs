//! Command-line flags.

use std::path::PathBuf;

use clap::Parser;

use crate::catalog::ImageMode;
use crate::config::{Config, ConfigError};

#[derive(Debug, Clone, Parser)]
#[command(name = "catalog-editor", version, about = "Edit a remote product list locally")]
pub struct Cli {
    /// Config file (default: ~/.config/catalog-editor/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the product list URL
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Seed from a saved JSON file instead of the network
    #[arg(long, value_name = "PATH", conflicts_with = "url")]
    pub seed_file: Option<PathBuf>,

    /// Require an image URL for new products
    #[arg(long)]
    pub with_images: bool,

    /// Append diagnostic logs to this file
    #[arg(long, value_name = "PATH")]
    pub log: Option<PathBuf>,
}

impl Cli {
    /// Load the config file named by `--config` (or the default one) and
    /// apply flag overrides on top.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.url {
            config.source.url = url.clone();
        }
        if self.with_images {
            config.catalog.image_mode = ImageMode::WithImages;
        }
        if let Some(path) = &self.log {
            config.logging.file = Some(path.clone());
        }
    }
}
