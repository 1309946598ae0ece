use core::time::Duration;

use gridsync_core::prelude::*;
use gridsync_router::prelude::GameState;
use rand::Rng;
use tracing::{debug, trace};

use crate::board::{ClaimOutcome, GridBoard, GridConfig};
use crate::clock::{MatchClock, MatchConfig, MatchPhase};
use crate::color::assign_color;
use crate::error::GameError;
use crate::roster::Roster;

/// Game state of one peer: the controllers of the players, the claimable grid and the match clock.
///
/// The same type is used on the server and on the clients; `local` is the id of the peer that owns
/// this state.
#[derive(Debug, Clone)]
pub struct MatchState {
    local: PeerId,
    roster: Roster,
    board: GridBoard,
    clock: MatchClock,
    /// Final scores sent by the server
    received_scores: Option<Vec<ScoreEntry>>,
}

impl MatchState {
    pub fn new(local: PeerId, grid: &GridConfig, clock: &MatchConfig) -> Result<Self, GameError> {
        Ok(Self {
            local,
            roster: Roster::default(),
            board: GridBoard::new(grid)?,
            clock: MatchClock::new(clock),
            received_scores: None,
        })
    }

    pub fn local(&self) -> PeerId {
        self.local
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    pub fn board(&self) -> &GridBoard {
        &self.board
    }

    pub fn clock(&self) -> &MatchClock {
        &self.clock
    }

    pub fn phase(&self) -> MatchPhase {
        self.clock.phase()
    }

    pub fn received_scores(&self) -> Option<&[ScoreEntry]> {
        self.received_scores.as_deref()
    }

    /// Registers the controller of a newly spawned player
    pub fn report_in(&mut self, entity: EntityId, owner: PeerId) -> bool {
        self.roster.report_in(entity, owner)
    }

    /// Records the input polled for a controller owned by the local peer.
    ///
    /// Returns false if the entity is unknown or owned by another peer.
    pub fn set_local_input(&mut self, entity: EntityId, input: InputFlags) -> bool {
        let local = self.local;
        match self.roster.get_mut(entity) {
            Some(controller) if controller.owner == local => {
                controller.input = input;
                true
            }
            _ => false,
        }
    }

    /// Records the pose computed by the physics of the host
    pub fn set_pose(&mut self, entity: EntityId, pose: Pose) -> bool {
        match self.roster.get_mut(entity) {
            Some(controller) => {
                controller.pose = pose;
                true
            }
            None => false,
        }
    }

    /// Claims `cell` for `entity`.
    ///
    /// The server broadcasts the claim when the outcome changed the board.
    pub fn claim(&mut self, cell: u8, entity: EntityId) -> ClaimOutcome {
        if self.roster.get(entity).is_none() {
            debug!(%entity, cell, "claim by an unknown entity");
            return ClaimOutcome::UnknownEntity;
        }
        self.board.claim(cell, entity)
    }

    /// Gives a random color to every controller that has none yet, and returns the new colors
    pub fn assign_colors<R: Rng>(&mut self, rng: &mut R) -> Vec<ColorEntry> {
        self.roster
            .iter_mut()
            .filter(|controller| controller.color.is_none())
            .map(|controller| {
                let color = assign_color(rng);
                controller.color = Some(color);
                ColorEntry::new(controller.entity, color)
            })
            .collect()
    }

    /// Advances the match clock. Returns true on the call that ends the match.
    pub fn advance(&mut self, delta: Duration) -> bool {
        self.clock.advance(delta)
    }
}

impl GameState for MatchState {
    /// Remote inputs never override the input of a locally controlled entity
    fn apply_input(&mut self, entity: EntityId, input: InputFlags) {
        let local = self.local;
        match self.roster.get_mut(entity) {
            Some(controller) if controller.owner != local => controller.input = input,
            Some(_) => trace!(%entity, "ignoring remote input for a local controller"),
            None => trace!(%entity, "input for an unknown entity"),
        }
    }

    fn apply_spatial(&mut self, entity: EntityId, pose: Pose) {
        if !self.set_pose(entity, pose) {
            trace!(%entity, "pose for an unknown entity");
        }
    }

    fn apply_map_claim(&mut self, entity: EntityId, cell: u8) {
        let outcome = self.claim(cell, entity);
        trace!(%entity, cell, ?outcome, "applied map claim");
    }

    fn apply_color(&mut self, entity: EntityId, color: Rgb) {
        match self.roster.get_mut(entity) {
            Some(controller) => controller.color = Some(color),
            None => trace!(%entity, "color for an unknown entity"),
        }
    }

    fn apply_color_roster(&mut self, roster: &[ColorEntry]) {
        for entry in roster {
            self.apply_color(entry.entity, entry.color);
        }
    }

    fn apply_game_start(&mut self) {
        if !self.clock.start() {
            debug!(phase = ?self.clock.phase(), "game start received outside of the lobby");
        }
    }

    fn apply_game_end(&mut self, scores: &[ScoreEntry]) {
        self.clock.end();
        self.received_scores = Some(scores.to_vec());
    }

    fn try_start_game(&mut self) -> bool {
        if self.roster.is_empty() {
            debug!("cannot start a game without players");
            return false;
        }
        self.clock.start()
    }

    fn current_input(&self, entity: EntityId) -> Option<InputFlags> {
        self.roster.get(entity).map(|controller| controller.input)
    }

    fn current_pose(&self, entity: EntityId) -> Option<Pose> {
        self.roster.get(entity).map(|controller| controller.pose)
    }

    fn color_roster(&self) -> Vec<ColorEntry> {
        self.roster
            .iter()
            .filter_map(|controller| {
                controller
                    .color
                    .map(|color| ColorEntry::new(controller.entity, color))
            })
            .collect()
    }

    fn final_scores(&self) -> Vec<ScoreEntry> {
        self.board.scores()
    }

    fn tracked_entities(&self) -> Vec<EntityId> {
        self.roster.entities()
    }
}
