//! Configuration module for label-perf.
//!
//! Settings come from an optional TOML file named by `LABEL_PERF_CONFIG`,
//! overridden by individual environment variables. The binary loads `.env`
//! before calling [`Config::from_env`].

mod file_config;

pub use file_config::{ExtractionSection, FileConfig, LoggingSection};

use crate::domain::performance::MalformedPolicy;
use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

pub const CONFIG_PATH_VAR: &str = "LABEL_PERF_CONFIG";
pub const ON_MALFORMED_VAR: &str = "LABEL_PERF_ON_MALFORMED";
pub const LOG_LEVEL_VAR: &str = "LABEL_PERF_LOG_LEVEL";

const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone)]
pub struct Config {
    pub on_malformed: MalformedPolicy,
    /// Default filter directive when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            on_malformed: MalformedPolicy::Fail,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let file = match env::var(CONFIG_PATH_VAR) {
            Ok(path) if !path.trim().is_empty() => FileConfig::load(path.trim())?,
            _ => FileConfig::default(),
        };

        let on_malformed = match env::var(ON_MALFORMED_VAR) {
            Ok(value) => MalformedPolicy::from_str(value.trim())
                .context(format!("Failed to parse {}", ON_MALFORMED_VAR))?,
            Err(_) => file.extraction.on_malformed,
        };

        let log_level = env::var(LOG_LEVEL_VAR)
            .ok()
            .or(file.logging.level)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        EnvFilter::try_new(&log_level).context(format!("Invalid log level: {}", log_level))?;

        Ok(Self {
            on_malformed,
            log_level,
        })
    }

    /// `RUST_LOG` when set, otherwise the configured level.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level))
    }
}
