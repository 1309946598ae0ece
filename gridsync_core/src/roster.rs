//! Entries of the bulk rosters exchanged between server and clients
use crate::color::Rgb;
use crate::id::EntityId;
use serde::{Deserialize, Serialize};

/// Color assigned to an entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorEntry {
    pub entity: EntityId,
    pub color: Rgb,
}

impl ColorEntry {
    pub fn new(entity: EntityId, color: Rgb) -> Self {
        Self { entity, color }
    }
}

/// Final score of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub entity: EntityId,
    pub score: u8,
}

impl ScoreEntry {
    pub fn new(entity: EntityId, score: u8) -> Self {
        Self { entity, score }
    }
}
