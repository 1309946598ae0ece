use gridsync_core::prelude::*;
use gridsync_serde::{BitReader, BitWriter, Result, SerializationError, ToBits};
use serde::{Deserialize, Serialize};

use crate::config::CodecConfig;
use crate::kind::MessageKind;
use crate::payload::{
    ColorRoster, MapEvent, PlayerColor, PlayerInput, PlayerSpatial, ScoreRoster,
};

/// A message of the protocol.
///
/// Messages are transient: they are built right before being encoded, or right after being decoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Message {
    PlayerInput(PlayerInput),
    PlayerSpatial(PlayerSpatial),
    MapEvent(MapEvent),
    PlayerColor(PlayerColor),
    /// Empty when sent by a client to request the roster, filled in the server's response
    RequestColors(ColorRoster),
    GameStart,
    GameEnd(ScoreRoster),
}

impl Message {
    pub fn player_input(entity: EntityId, input: InputFlags) -> Self {
        Message::PlayerInput(PlayerInput { entity, input })
    }

    pub fn player_spatial(entity: EntityId, pose: Pose) -> Self {
        Message::PlayerSpatial(PlayerSpatial { entity, pose })
    }

    pub fn map_event(entity: EntityId, cell: u8) -> Self {
        Message::MapEvent(MapEvent { entity, cell })
    }

    pub fn player_color(entity: EntityId, color: Rgb) -> Self {
        Message::PlayerColor(PlayerColor { entity, color })
    }

    /// The color request a client sends to the server
    pub fn request_colors() -> Self {
        Message::RequestColors(ColorRoster::default())
    }

    /// The color roster the server sends back
    pub fn color_roster(entries: Vec<ColorEntry>) -> Self {
        Message::RequestColors(ColorRoster { entries })
    }

    pub fn game_end(entries: Vec<ScoreEntry>) -> Self {
        Message::GameEnd(ScoreRoster { entries })
    }

    pub fn kind(&self) -> MessageKind {
        match self {
            Message::PlayerInput(_) => MessageKind::PlayerInput,
            Message::PlayerSpatial(_) => MessageKind::PlayerSpatial,
            Message::MapEvent(_) => MessageKind::MapEvent,
            Message::PlayerColor(_) => MessageKind::PlayerColor,
            Message::RequestColors(_) => MessageKind::RequestColors,
            Message::GameStart => MessageKind::GameStart,
            Message::GameEnd(_) => MessageKind::GameEnd,
        }
    }

    /// Number of entries for the roster messages
    pub fn roster_len(&self) -> Option<usize> {
        match self {
            Message::RequestColors(roster) => Some(roster.entries.len()),
            Message::GameEnd(roster) => Some(roster.entries.len()),
            _ => None,
        }
    }
}

impl ToBits for Message {
    type Context = CodecConfig;

    fn bits_len(&self, ctx: &CodecConfig) -> usize {
        let payload = match self {
            Message::PlayerInput(payload) => payload.bits_len(ctx),
            Message::PlayerSpatial(payload) => payload.bits_len(ctx),
            Message::MapEvent(payload) => payload.bits_len(ctx),
            Message::PlayerColor(payload) => payload.bits_len(ctx),
            Message::RequestColors(payload) => payload.bits_len(ctx),
            Message::GameStart => 0,
            Message::GameEnd(payload) => payload.bits_len(ctx),
        };
        MessageKind::BITS as usize + payload
    }

    fn to_bits(&self, writer: &mut BitWriter, ctx: &CodecConfig) -> Result<()> {
        writer.write_bits(self.kind().tag() as u64, MessageKind::BITS)?;
        match self {
            Message::PlayerInput(payload) => payload.to_bits(writer, ctx),
            Message::PlayerSpatial(payload) => payload.to_bits(writer, ctx),
            Message::MapEvent(payload) => payload.to_bits(writer, ctx),
            Message::PlayerColor(payload) => payload.to_bits(writer, ctx),
            Message::RequestColors(payload) => payload.to_bits(writer, ctx),
            Message::GameStart => Ok(()),
            Message::GameEnd(payload) => payload.to_bits(writer, ctx),
        }
    }

    /// Reads the tag, then the payload of its kind.
    ///
    /// An unknown tag stops decoding with [`SerializationError::UnknownTag`] before any other bit
    /// is read.
    fn from_bits(reader: &mut BitReader, ctx: &CodecConfig) -> Result<Self> {
        let tag = reader.read_nibble()?;
        let kind = MessageKind::try_from(tag).map_err(|_| SerializationError::UnknownTag(tag))?;
        read_payload(kind, reader, ctx)
    }
}

/// Reads the payload that follows the tag of `kind`
fn read_payload(
    kind: MessageKind,
    reader: &mut BitReader,
    ctx: &CodecConfig,
) -> Result<Message> {
    Ok(match kind {
        MessageKind::PlayerInput => Message::PlayerInput(PlayerInput::from_bits(reader, ctx)?),
        MessageKind::PlayerSpatial => {
            Message::PlayerSpatial(PlayerSpatial::from_bits(reader, ctx)?)
        }
        MessageKind::MapEvent => Message::MapEvent(MapEvent::from_bits(reader, ctx)?),
        MessageKind::PlayerColor => Message::PlayerColor(PlayerColor::from_bits(reader, ctx)?),
        MessageKind::RequestColors => {
            Message::RequestColors(ColorRoster::from_bits(reader, ctx)?)
        }
        MessageKind::GameStart => Message::GameStart,
        MessageKind::GameEnd => Message::GameEnd(ScoreRoster::from_bits(reader, ctx)?),
    })
}
