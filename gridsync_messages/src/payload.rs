//! Payloads of the messages, i.e. everything that follows the tag.
//!
//! Every payload starts with the identifier of the entity it is about, except for the rosters
//! which start with the number of entries.
use gridsync_core::prelude::*;
use gridsync_serde::{BitReader, BitWriter, QuantizedRange, Result, SerializationError, ToBits};
use serde::{Deserialize, Serialize};

use crate::config::CodecConfig;

/// Width of the entry count of a roster
pub const COUNT_BITS: u32 = 4;
/// Maximum number of entries in a roster
pub const MAX_ROSTER_LEN: usize = (1 << COUNT_BITS) - 1;
/// Width of a cell index
pub const CELL_BITS: u32 = 8;
/// Width of a score
pub const SCORE_BITS: u32 = 8;

pub(crate) fn write_entity(entity: EntityId, writer: &mut BitWriter) -> Result<()> {
    if !entity.fits_wire() {
        return Err(SerializationError::ValueOverflow {
            value: entity.0,
            width: EntityId::WIRE_BITS,
        });
    }
    writer.write_bits(entity.0, EntityId::WIRE_BITS)
}

pub(crate) fn read_entity(reader: &mut BitReader) -> Result<EntityId> {
    Ok(EntityId(reader.read_bits(EntityId::WIRE_BITS)?))
}

fn write_color(color: &Rgb, range: &QuantizedRange, writer: &mut BitWriter) -> Result<()> {
    for channel in color.channels() {
        range.write(channel, writer)?;
    }
    Ok(())
}

fn read_color(reader: &mut BitReader, range: &QuantizedRange) -> Result<Rgb> {
    Ok(Rgb::new(range.read(reader)?, range.read(reader)?, range.read(reader)?))
}

fn color_bits(ctx: &CodecConfig) -> usize {
    3 * ctx.quantization.color.bits as usize
}

/// Most recent movement intent of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInput {
    pub entity: EntityId,
    pub input: InputFlags,
}

impl ToBits for PlayerInput {
    type Context = CodecConfig;

    fn bits_len(&self, _: &CodecConfig) -> usize {
        (EntityId::WIRE_BITS + InputFlags::WIRE_BITS) as usize
    }

    fn to_bits(&self, writer: &mut BitWriter, _: &CodecConfig) -> Result<()> {
        write_entity(self.entity, writer)?;
        writer.write_bits(self.input.bits() as u64, InputFlags::WIRE_BITS)
    }

    fn from_bits(reader: &mut BitReader, _: &CodecConfig) -> Result<Self> {
        reader.ensure_remaining((EntityId::WIRE_BITS + InputFlags::WIRE_BITS) as usize)?;
        let entity = read_entity(reader)?;
        let input = InputFlags::from_bits_truncate(reader.read_bits(InputFlags::WIRE_BITS)? as u8);
        Ok(Self { entity, input })
    }
}

/// Authoritative pose of an entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerSpatial {
    pub entity: EntityId,
    pub pose: Pose,
}

impl PlayerSpatial {
    fn payload_bits(ctx: &CodecConfig) -> usize {
        let quantization = &ctx.quantization;
        EntityId::WIRE_BITS as usize
            + 3 * quantization.position.bits as usize
            + 3 * quantization.rotation.bits as usize
    }
}

impl ToBits for PlayerSpatial {
    type Context = CodecConfig;

    fn bits_len(&self, ctx: &CodecConfig) -> usize {
        Self::payload_bits(ctx)
    }

    fn to_bits(&self, writer: &mut BitWriter, ctx: &CodecConfig) -> Result<()> {
        let position = &ctx.quantization.position;
        let rotation = &ctx.quantization.rotation;
        // angles are periodic: canonicalize them before quantizing
        let pose = self.pose.wrapped();
        write_entity(self.entity, writer)?;
        for axis in pose.position.to_array() {
            position.write(axis, writer)?;
        }
        for angle in pose.rotation.to_array() {
            rotation.write(angle, writer)?;
        }
        Ok(())
    }

    fn from_bits(reader: &mut BitReader, ctx: &CodecConfig) -> Result<Self> {
        reader.ensure_remaining(Self::payload_bits(ctx))?;
        let position_range = &ctx.quantization.position;
        let rotation_range = &ctx.quantization.rotation;
        let entity = read_entity(reader)?;
        let mut position = [0.0; 3];
        for axis in position.iter_mut() {
            *axis = position_range.read(reader)?;
        }
        let mut rotation = [0.0; 3];
        for angle in rotation.iter_mut() {
            *angle = rotation_range.read(reader)?;
        }
        Ok(Self {
            entity,
            pose: Pose::new(Vec3::from_array(position), Vec3::from_array(rotation)),
        })
    }
}

/// An entity claimed a cell of the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapEvent {
    pub entity: EntityId,
    pub cell: u8,
}

impl ToBits for MapEvent {
    type Context = CodecConfig;

    fn bits_len(&self, _: &CodecConfig) -> usize {
        (EntityId::WIRE_BITS + CELL_BITS) as usize
    }

    fn to_bits(&self, writer: &mut BitWriter, _: &CodecConfig) -> Result<()> {
        write_entity(self.entity, writer)?;
        writer.write_byte(self.cell)
    }

    fn from_bits(reader: &mut BitReader, ctx: &CodecConfig) -> Result<Self> {
        reader.ensure_remaining((EntityId::WIRE_BITS + CELL_BITS) as usize)?;
        let entity = read_entity(reader)?;
        let cell = reader.read_byte()?;
        if ctx.check_bounds
            && let Some(cells) = ctx.grid_cells
            && cell as u16 >= cells
        {
            return Err(SerializationError::OutOfRange {
                field: "cell index",
                value: cell as f64,
            });
        }
        Ok(Self { entity, cell })
    }
}

/// Color assigned to an entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerColor {
    pub entity: EntityId,
    pub color: Rgb,
}

impl ToBits for PlayerColor {
    type Context = CodecConfig;

    fn bits_len(&self, ctx: &CodecConfig) -> usize {
        EntityId::WIRE_BITS as usize + color_bits(ctx)
    }

    fn to_bits(&self, writer: &mut BitWriter, ctx: &CodecConfig) -> Result<()> {
        write_entity(self.entity, writer)?;
        write_color(&self.color, &ctx.quantization.color, writer)
    }

    fn from_bits(reader: &mut BitReader, ctx: &CodecConfig) -> Result<Self> {
        reader.ensure_remaining(EntityId::WIRE_BITS as usize + color_bits(ctx))?;
        let entity = read_entity(reader)?;
        let color = read_color(reader, &ctx.quantization.color)?;
        Ok(Self { entity, color })
    }
}

/// Count-prefixed list of entity colors.
///
/// Empty when sent by a client (a request for the roster), filled when sent by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorRoster {
    pub entries: Vec<ColorEntry>,
}

impl ColorRoster {
    pub fn entry_bits(ctx: &CodecConfig) -> usize {
        EntityId::WIRE_BITS as usize + color_bits(ctx)
    }
}

impl ToBits for ColorRoster {
    type Context = CodecConfig;

    fn bits_len(&self, ctx: &CodecConfig) -> usize {
        COUNT_BITS as usize + self.entries.len() * Self::entry_bits(ctx)
    }

    fn to_bits(&self, writer: &mut BitWriter, ctx: &CodecConfig) -> Result<()> {
        writer.write_bits(self.entries.len() as u64, COUNT_BITS)?;
        for entry in &self.entries {
            write_entity(entry.entity, writer)?;
            write_color(&entry.color, &ctx.quantization.color, writer)?;
        }
        Ok(())
    }

    fn from_bits(reader: &mut BitReader, ctx: &CodecConfig) -> Result<Self> {
        let count = reader.read_bits(COUNT_BITS)? as usize;
        reader.ensure_remaining(count * Self::entry_bits(ctx))?;
        let mut entries = Vec::with_capacity(count);
        for _ in 0..count {
            let entity = read_entity(reader)?;
            let color = read_color(reader, &ctx.quantization.color)?;
            entries.push(ColorEntry { entity, color });
        }
        Ok(Self { entries })
    }
}

/// Count-prefixed list of final scores
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRoster {
    pub entries: Vec<ScoreEntry>,
}

impl ScoreRoster {
    pub const ENTRY_BITS: usize = (EntityId::WIRE_BITS + SCORE_BITS) as usize;
}

impl ToBits for ScoreRoster {
    type Context = CodecConfig;

    fn bits_len(&self, _: &CodecConfig) -> usize {
        COUNT_BITS as usize + self.entries.len() * Self::ENTRY_BITS
    }

    fn to_bits(&self, writer: &mut BitWriter, _: &CodecConfig) -> Result<()> {
        writer.write_bits(self.entries.len() as u64, COUNT_BITS)?;
        for entry in &self.entries {
            write_entity(entry.entity, writer)?;
            writer.write_byte(entry.score)?;
        }
        Ok(())
    }

    fn from_bits(reader: &mut BitReader, _: &CodecConfig) -> Result<Self> {
        let count = reader.read_bits(COUNT_BITS)? as usize;
        reader.ensure_remaining(count * Self::ENTRY_BITS)?;
        let mut entries = Vec::with_capacity(count);
        for _ in 0..count {
            let entity = read_entity(reader)?;
            let score = reader.read_byte()?;
            entries.push(ScoreEntry { entity, score });
        }
        Ok(Self { entries })
    }
}
