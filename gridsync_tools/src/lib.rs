//! Debugging tools for the gridsync wire format.
//!
//! The `gridsync-inspect` binary (feature `cli`) decodes captured buffers, encodes messages
//! written as JSON, and prints the bit layout of every message kind.

pub mod hex;
pub mod inspect;

use gridsync_messages::{DecodeError, EncodeError};

#[derive(thiserror::Error, Debug)]
pub enum ToolsError {
    #[error("invalid hex digit {0:?}")]
    InvalidHexDigit(char),
    #[error("hex input has an odd number of digits ({0})")]
    OddHexLength(usize),
    #[error("could not decode the buffer: {0}")]
    Decode(#[from] DecodeError),
    #[error("could not encode the message: {0}")]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
