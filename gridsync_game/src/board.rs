//! The grid of claimable cells
use gridsync_core::prelude::{EntityId, ScoreEntry};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::GameError;

/// Largest grid whose cell indices fit in one byte
pub const MAX_CELLS: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub x_len: u16,
    pub z_len: u16,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            x_len: 10,
            z_len: 10,
        }
    }
}

impl GridConfig {
    pub fn cells(&self) -> usize {
        self.x_len as usize * self.z_len as usize
    }

    pub fn validate(&self) -> Result<(), GameError> {
        let cells = self.cells();
        if cells == 0 || cells > MAX_CELLS {
            return Err(GameError::InvalidGrid {
                x_len: self.x_len,
                z_len: self.z_len,
            });
        }
        Ok(())
    }
}

/// Result of [`GridBoard::claim`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// The cell changed owner; `previous` is the owner it was taken from
    Claimed { previous: Option<EntityId> },
    /// The entity already owned the cell
    AlreadyOwned,
    OutOfBounds,
    /// The claiming entity has no controller
    UnknownEntity,
}

impl ClaimOutcome {
    /// Whether the claim changed the board, and must be broadcast
    pub fn changed(&self) -> bool {
        matches!(self, ClaimOutcome::Claimed { .. })
    }
}

/// A `x_len` by `z_len` grid of cells that entities claim by walking on them.
///
/// Cell `(x, z)` has the index `z * x_len + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridBoard {
    x_len: u16,
    z_len: u16,
    owners: Vec<Option<EntityId>>,
}

impl GridBoard {
    pub fn new(config: &GridConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            x_len: config.x_len,
            z_len: config.z_len,
            owners: vec![None; config.cells()],
        })
    }

    pub fn x_len(&self) -> u16 {
        self.x_len
    }

    pub fn z_len(&self) -> u16 {
        self.z_len
    }

    pub fn cells(&self) -> usize {
        self.owners.len()
    }

    /// Index of the cell `(x, z)`, if it is on the board
    pub fn cell_index(&self, x: u16, z: u16) -> Option<u8> {
        if x >= self.x_len || z >= self.z_len {
            return None;
        }
        u8::try_from(z as usize * self.x_len as usize + x as usize).ok()
    }

    pub fn owner(&self, cell: u8) -> Option<EntityId> {
        self.owners.get(cell as usize).copied().flatten()
    }

    /// Gives `cell` to `entity`, taking it from its previous owner if any
    pub fn claim(&mut self, cell: u8, entity: EntityId) -> ClaimOutcome {
        let Some(owner) = self.owners.get_mut(cell as usize) else {
            return ClaimOutcome::OutOfBounds;
        };
        if *owner == Some(entity) {
            return ClaimOutcome::AlreadyOwned;
        }
        let previous = owner.replace(entity);
        trace!(cell, %entity, ?previous, "cell claimed");
        ClaimOutcome::Claimed { previous }
    }

    /// Number of cells owned by each entity.
    ///
    /// Entities appear in the order of the first cell they own; scores saturate at 255.
    pub fn scores(&self) -> Vec<ScoreEntry> {
        let mut scores: Vec<ScoreEntry> = Vec::new();
        for entity in self.owners.iter().flatten() {
            match scores.iter_mut().find(|score| score.entity == *entity) {
                Some(score) => score.score = score.score.saturating_add(1),
                None => scores.push(ScoreEntry::new(*entity, 1)),
            }
        }
        scores
    }

    pub fn reset(&mut self) {
        self.owners.fill(None);
    }
}
