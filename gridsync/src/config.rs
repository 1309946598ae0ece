//! Settings of a gridsync peer, loaded from JSON
use std::path::Path;

#[cfg(feature = "game")]
use gridsync_game::prelude::{GridConfig, MatchConfig};
use gridsync_messages::prelude::CodecConfig;
use gridsync_router::prelude::SyncConfig;
use serde::{Deserialize, Serialize};

use crate::error::{GridsyncError, Result};
use crate::log::LogConfig;

/// Every config of a gridsync peer. Missing fields take their default value.
///
/// ```json
/// {
///     "codec": { "check_bounds": true },
///     "sync": { "input_interval_ms": 50, "pose_interval_ms": 500 },
///     "grid": { "x_len": 10, "z_len": 10 },
///     "game": { "duration_ms": 60000 },
///     "log": { "level": "debug" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridsyncConfig {
    pub codec: CodecConfig,
    pub sync: SyncConfig,
    #[cfg(feature = "game")]
    pub grid: GridConfig,
    #[cfg(feature = "game")]
    pub game: MatchConfig,
    pub log: LogConfig,
}

impl GridsyncConfig {
    /// Parses and validates a JSON config
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| GridsyncError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.codec.validate()?;
        if self.sync.input_interval_ms == 0 {
            return Err(GridsyncError::ZeroInterval { name: "input" });
        }
        if self.sync.pose_interval_ms == 0 {
            return Err(GridsyncError::ZeroInterval { name: "pose" });
        }
        #[cfg(feature = "game")]
        {
            self.grid.validate()?;
            if self.game.duration_ms == 0 {
                return Err(GridsyncError::ZeroInterval { name: "match" });
            }
            if let Some(cells) = self.codec.grid_cells
                && cells as usize != self.grid.cells()
            {
                return Err(GridsyncError::GridMismatch {
                    codec: cells,
                    grid: self.grid.cells(),
                });
            }
        }
        self.log.validate()
    }

    /// Codec config bounded to the cells of the grid, unless it sets its own bound
    pub fn codec(&self) -> CodecConfig {
        let config = self.codec.clone();
        #[cfg(feature = "game")]
        {
            if config.grid_cells.is_none()
                && let Ok(cells) = u16::try_from(self.grid.cells())
            {
                return config.with_grid_cells(cells);
            }
        }
        config
    }
}
