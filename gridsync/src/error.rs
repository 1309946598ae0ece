use std::path::PathBuf;

use gridsync_serde::SerializationError;

pub type Result<T> = core::result::Result<T, GridsyncError>;

#[derive(thiserror::Error, Debug)]
pub enum GridsyncError {
    #[error("could not read the config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid codec config: {0}")]
    Codec(#[from] SerializationError),
    #[cfg(feature = "game")]
    #[error(transparent)]
    Game(#[from] gridsync_game::GameError),
    #[error("the {name} interval must be greater than zero")]
    ZeroInterval { name: &'static str },
    #[error("the codec expects {codec} grid cells but the grid has {grid}")]
    GridMismatch { codec: u16, grid: usize },
    #[error("invalid log level {0:?}")]
    InvalidLevel(String),
    #[error("invalid log filter: {0}")]
    InvalidFilter(#[from] tracing_subscriber::filter::ParseError),
    #[error("logging is already initialized: {0}")]
    LoggingInitialized(#[from] tracing_subscriber::util::TryInitError),
}
