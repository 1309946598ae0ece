use gridsync_core::prelude::*;

/// The game-side collaborator of the [`ProtocolRouter`](crate::router::ProtocolRouter).
///
/// The router calls the `apply_*` methods with the content of the messages it receives, and the
/// gather methods (`current_*`, rosters) to build the messages it sends.
pub trait GameState {
    /// Most recent movement intent of `entity`
    fn apply_input(&mut self, entity: EntityId, input: InputFlags);

    /// Authoritative pose of `entity`
    fn apply_spatial(&mut self, entity: EntityId, pose: Pose);

    /// `entity` claimed the map cell `cell`
    fn apply_map_claim(&mut self, entity: EntityId, cell: u8);

    fn apply_color(&mut self, entity: EntityId, color: Rgb);

    /// Colors of every entity, as sent back by the server
    fn apply_color_roster(&mut self, roster: &[ColorEntry]);

    fn apply_game_start(&mut self);

    /// Final scores, in the order the server sent them
    fn apply_game_end(&mut self, scores: &[ScoreEntry]);

    /// Called on the server when a client asks to start the game.
    ///
    /// Returns true if the game started, in which case the start is broadcast to every peer.
    fn try_start_game(&mut self) -> bool;

    fn current_input(&self, entity: EntityId) -> Option<InputFlags>;

    fn current_pose(&self, entity: EntityId) -> Option<Pose>;

    fn color_roster(&self) -> Vec<ColorEntry>;

    fn final_scores(&self) -> Vec<ScoreEntry>;

    /// Entities whose state is periodically re-broadcast by the server
    fn tracked_entities(&self) -> Vec<EntityId>;
}
