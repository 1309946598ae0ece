use gridsync_serde::SerializationError;

/// Error returned when a message cannot be encoded. Nothing is sent when encoding fails.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EncodeError {
    /// A field does not fit its declared width or quantization domain
    #[error(transparent)]
    Serialization(#[from] SerializationError),
    #[error("roster of {len} entries exceeds the maximum of {max}")]
    RosterTooLong { len: usize, max: usize },
}

/// Error returned when a buffer cannot be decoded into a message
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// The leading tag does not name a known message kind
    #[error("unknown message kind {0}")]
    UnknownKind(u8),
    #[error("buffer truncated: {needed} bits needed but only {remaining} remaining")]
    Truncated { needed: usize, remaining: usize },
    /// A decoded value failed the bounds checks of the codec
    #[error("decoded {field} value {value} is out of range")]
    OutOfRange { field: &'static str, value: f64 },
    #[error(transparent)]
    Serialization(SerializationError),
}

impl From<SerializationError> for DecodeError {
    fn from(value: SerializationError) -> Self {
        match value {
            SerializationError::Underrun {
                requested,
                remaining,
            } => DecodeError::Truncated {
                needed: requested as usize,
                remaining,
            },
            SerializationError::UnknownTag(tag) => DecodeError::UnknownKind(tag),
            SerializationError::OutOfRange { field, value } => {
                DecodeError::OutOfRange { field, value }
            }
            other => DecodeError::Serialization(other),
        }
    }
}
