//! Installs the global `tracing` subscriber
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_subscriber::{EnvFilter, prelude::*, registry::Registry};

use crate::error::{GridsyncError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filters out logs that are "less than" the given level
    pub level: String,
    /// Extra directives in the [`EnvFilter`] format, e.g. `gridsync_router=debug`
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            filter: String::new(),
        }
    }
}

impl LogConfig {
    pub fn level(&self) -> Result<Level> {
        Level::from_str(&self.level).map_err(|_| GridsyncError::InvalidLevel(self.level.clone()))
    }

    /// Directives used when `RUST_LOG` is not set
    pub fn directives(&self) -> Result<String> {
        let level = self.level()?;
        if self.filter.is_empty() {
            Ok(level.to_string())
        } else {
            Ok(format!("{},{}", level, self.filter))
        }
    }

    pub fn validate(&self) -> Result<()> {
        EnvFilter::try_new(self.directives()?)?;
        Ok(())
    }
}

/// Installs a [`Registry`] with an [`EnvFilter`] and a `fmt` layer writing to stderr.
///
/// `RUST_LOG` takes precedence over the config. Fails if a global subscriber is already set.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let directives = config.directives()?;
    let filter_layer = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&directives)?,
    };
    let fmt_layer = tracing_subscriber::fmt::Layer::default().with_writer(std::io::stderr);
    Registry::default()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;
    tracing::debug!(%directives, "logging initialized");
    Ok(())
}
