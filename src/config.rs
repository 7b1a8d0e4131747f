use ::config::{Config as ConfigBuilder, Environment, File};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Generator settings layered from `mongen.toml`, `MONGEN_*` environment
/// variables, and defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub mongodb: MongodbConfig,
    pub logging: LoggingConfig,
}

/// Default MongoDB client endpoint rendered into the generated YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongodbConfig {
    pub host: String,
    pub port: u16,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mongodb: MongodbConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for MongodbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 27017,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration with precedence:
    /// 1. Environment variables (MONGEN_*)
    /// 2. mongen.toml file (if present)
    /// 3. Default values
    pub fn load() -> Result<Self> {
        Self::load_from_dir(&std::env::current_dir()?)
    }

    /// Load configuration from a specific directory
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let mut builder = ConfigBuilder::builder();

        let config_file = dir.join("mongen.toml");
        if config_file.exists() {
            builder = builder.add_source(File::from(config_file));
        }

        builder = builder.add_source(
            Environment::with_prefix("MONGEN")
                .separator("_")
                .try_parsing(true),
        );

        let loaded = builder
            .build()
            .context("Failed to build configuration")?;

        // Start from defaults and take sections that were actually provided.
        let mut result = Config::default();
        if let Ok(mongodb) = loaded.get::<MongodbConfig>("mongodb") {
            result.mongodb = mongodb;
        }
        if let Ok(logging) = loaded.get::<LoggingConfig>("logging") {
            result.logging = logging;
        }

        Ok(result)
    }
}
