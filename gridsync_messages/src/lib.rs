/*! # Gridsync Messages

The fixed set of messages exchanged by the gridsync protocol, and the [`MessageCodec`] that packs
them into bytes.

| kind            | tag | payload                                              |
|-----------------|-----|------------------------------------------------------|
| `PlayerInput`   | 0   | entity (4), input flags (4)                          |
| `PlayerSpatial` | 1   | entity (4), position (3 × 13), rotation (3 × 13)     |
| `MapEvent`      | 2   | entity (4), cell index (8)                           |
| `PlayerColor`   | 3   | entity (4), r, g, b (3 × 8)                          |
| `RequestColors` | 4   | count (4), count × { entity (4), r, g, b (3 × 8) }   |
| `GameStart`     | 5   |                                                      |
| `GameEnd`       | 6   | count (4), count × { entity (4), score (8) }         |
*/

pub mod codec;
pub mod config;
mod error;
pub mod kind;
pub mod layout;
pub mod message;
pub mod payload;

pub use error::{DecodeError, EncodeError};

pub mod prelude {
    pub use crate::codec::MessageCodec;
    pub use crate::config::{CodecConfig, QuantizationConfig};
    pub use crate::kind::MessageKind;
    pub use crate::message::Message;
    pub use crate::payload::{
        ColorRoster, MapEvent, PlayerColor, PlayerInput, PlayerSpatial, ScoreRoster,
        MAX_ROSTER_LEN,
    };
    pub use crate::{DecodeError, EncodeError};
}
