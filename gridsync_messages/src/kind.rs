use core::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// Tag identifying the shape of a message.
///
/// The tag is the first [`MessageKind::BITS`] bits of every encoded message.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    PlayerInput = 0,
    PlayerSpatial = 1,
    MapEvent = 2,
    PlayerColor = 3,
    RequestColors = 4,
    GameStart = 5,
    GameEnd = 6,
}

impl MessageKind {
    /// Width of the tag on the wire
    pub const BITS: u32 = 4;

    pub const ALL: [MessageKind; 7] = [
        MessageKind::PlayerInput,
        MessageKind::PlayerSpatial,
        MessageKind::MapEvent,
        MessageKind::PlayerColor,
        MessageKind::RequestColors,
        MessageKind::GameStart,
        MessageKind::GameEnd,
    ];

    pub fn tag(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            MessageKind::PlayerInput => "PlayerInput",
            MessageKind::PlayerSpatial => "PlayerSpatial",
            MessageKind::MapEvent => "MapEvent",
            MessageKind::PlayerColor => "PlayerColor",
            MessageKind::RequestColors => "RequestColors",
            MessageKind::GameStart => "GameStart",
            MessageKind::GameEnd => "GameEnd",
        }
    }
}

impl TryFrom<u8> for MessageKind {
    type Error = DecodeError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(MessageKind::PlayerInput),
            1 => Ok(MessageKind::PlayerSpatial),
            2 => Ok(MessageKind::MapEvent),
            3 => Ok(MessageKind::PlayerColor),
            4 => Ok(MessageKind::RequestColors),
            5 => Ok(MessageKind::GameStart),
            6 => Ok(MessageKind::GameEnd),
            _ => Err(DecodeError::UnknownKind(tag)),
        }
    }
}

impl Display for MessageKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
