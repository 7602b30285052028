//! Layered configuration
//!
//! Sources, lowest priority first:
//!
//! 1. Built-in defaults
//! 2. A TOML file: the explicit path, else `KERNEL_CONFIG_PATH`, else an
//!    optional `kernel.toml` in the working directory
//! 3. Environment variables: `KERNEL_ENGINE__MAX_DEPTH`, `KERNEL_TRACE__ENABLED`
//!    (a `.env` file is loaded first if present)
//! 4. Explicit builder overrides (CLI flags)
//!
//! ```toml
//! [engine]
//! max_depth = 256
//!
//! [trace]
//! enabled = true
//! ```

use anyhow::{bail, Context, Result};
use config::{Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::interpreter::Limits;

const ENV_PREFIX: &str = "KERNEL";
const CONFIG_PATH_VAR: &str = "KERNEL_CONFIG_PATH";
const DEFAULT_CONFIG_NAME: &str = "kernel";

/* ===================== Config ===================== */

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum nesting depth of child frames
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

fn default_max_depth() -> usize {
    Limits::default().max_depth
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TraceConfig {
    /// Log every executed instruction through `tracing`
    #[serde(default)]
    pub enabled: bool,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Load from the default sources with no overrides
    pub fn load() -> Result<Self> {
        Self::builder().build()
    }

    pub fn limits(&self) -> Limits {
        Limits {
            max_depth: self.engine.max_depth,
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to render configuration")
    }

    fn validate(&self) -> Result<()> {
        if self.engine.max_depth == 0 {
            bail!("engine.max_depth must be at least 1");
        }
        Ok(())
    }
}

/* ===================== Builder ===================== */

#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config_path: Option<PathBuf>,
    max_depth: Option<usize>,
    trace: Option<bool>,
}

impl ConfigBuilder {
    pub fn config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    pub fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn trace(mut self, enabled: Option<bool>) -> Self {
        self.trace = enabled;
        self
    }

    pub fn build(self) -> Result<Config> {
        // A missing .env is fine
        let _ = dotenvy::dotenv();

        let path = self
            .config_path
            .or_else(|| std::env::var(CONFIG_PATH_VAR).ok().map(PathBuf::from));

        let file = match &path {
            Some(path) => File::from(path.as_path())
                .format(FileFormat::Toml)
                .required(true),
            None => File::new(DEFAULT_CONFIG_NAME, FileFormat::Toml).required(false),
        };

        let sources = config::Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration sources")?;

        let mut config: Config = sources
            .try_deserialize()
            .context("Invalid configuration")?;

        if let Some(max_depth) = self.max_depth {
            config.engine.max_depth = max_depth;
        }
        if let Some(enabled) = self.trace {
            config.trace.enabled = enabled;
        }

        config.validate()?;
        Ok(config)
    }
}
