/*! # Gridsync Game

A reference [`GameState`](gridsync_router::prelude::GameState) for the gridsync protocol.

Players walk on a grid of cells and claim the cells they step on; when the match clock runs out,
every player scores the number of cells it owns.
*/

pub mod board;
pub mod clock;
pub mod color;
mod error;
pub mod roster;
pub mod state;

pub use error::GameError;

pub mod prelude {
    pub use crate::board::{ClaimOutcome, GridBoard, GridConfig};
    pub use crate::clock::{MatchClock, MatchConfig, MatchPhase};
    pub use crate::color::assign_color;
    pub use crate::roster::{Controller, Roster};
    pub use crate::state::MatchState;
    pub use crate::GameError;
}
