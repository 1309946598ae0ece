//! Description of the bit layout of each message kind
use gridsync_core::prelude::{EntityId, InputFlags};
use serde::Serialize;

use crate::config::CodecConfig;
use crate::kind::MessageKind;
use crate::payload::{CELL_BITS, COUNT_BITS, SCORE_BITS};

/// One field of a message layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldLayout {
    pub name: &'static str,
    pub bits: u32,
    /// The field belongs to the entry that is repeated `count` times
    pub repeated: bool,
}

impl FieldLayout {
    const fn once(name: &'static str, bits: u32) -> Self {
        Self {
            name,
            bits,
            repeated: false,
        }
    }

    const fn repeated(name: &'static str, bits: u32) -> Self {
        Self {
            name,
            bits,
            repeated: true,
        }
    }
}

/// Fields of `kind` in wire order, the tag included
pub fn layout(kind: MessageKind, config: &CodecConfig) -> Vec<FieldLayout> {
    let position = config.quantization.position.bits;
    let rotation = config.quantization.rotation.bits;
    let color = config.quantization.color.bits;
    let mut fields = vec![FieldLayout::once("kind", MessageKind::BITS)];
    match kind {
        MessageKind::PlayerInput => fields.extend([
            FieldLayout::once("entity", EntityId::WIRE_BITS),
            FieldLayout::once("input", InputFlags::WIRE_BITS),
        ]),
        MessageKind::PlayerSpatial => fields.extend([
            FieldLayout::once("entity", EntityId::WIRE_BITS),
            FieldLayout::once("position.x", position),
            FieldLayout::once("position.y", position),
            FieldLayout::once("position.z", position),
            FieldLayout::once("rotation.x", rotation),
            FieldLayout::once("rotation.y", rotation),
            FieldLayout::once("rotation.z", rotation),
        ]),
        MessageKind::MapEvent => fields.extend([
            FieldLayout::once("entity", EntityId::WIRE_BITS),
            FieldLayout::once("cell", CELL_BITS),
        ]),
        MessageKind::PlayerColor => fields.extend([
            FieldLayout::once("entity", EntityId::WIRE_BITS),
            FieldLayout::once("r", color),
            FieldLayout::once("g", color),
            FieldLayout::once("b", color),
        ]),
        MessageKind::RequestColors => fields.extend([
            FieldLayout::once("count", COUNT_BITS),
            FieldLayout::repeated("entity", EntityId::WIRE_BITS),
            FieldLayout::repeated("r", color),
            FieldLayout::repeated("g", color),
            FieldLayout::repeated("b", color),
        ]),
        MessageKind::GameStart => {}
        MessageKind::GameEnd => fields.extend([
            FieldLayout::once("count", COUNT_BITS),
            FieldLayout::repeated("entity", EntityId::WIRE_BITS),
            FieldLayout::repeated("score", SCORE_BITS),
        ]),
    }
    fields
}

/// Bits of the fields that appear once, and bits of one repeated entry
pub fn layout_bits(kind: MessageKind, config: &CodecConfig) -> (usize, usize) {
    layout(kind, config)
        .iter()
        .fold((0, 0), |(fixed, entry), field| {
            if field.repeated {
                (fixed, entry + field.bits as usize)
            } else {
                (fixed + field.bits as usize, entry)
            }
        })
}
