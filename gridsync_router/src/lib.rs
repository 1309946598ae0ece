/*! # Gridsync Router

The [`ProtocolRouter`](router::ProtocolRouter) sits between the transport and the game state:
inbound buffers are decoded and dispatched to a [`GameState`](state::GameState), and outbound
messages are gathered from it, encoded and handed to the transport.
*/

mod error;
pub mod router;
pub mod schedule;
pub mod state;
pub mod stats;

pub use error::{Result, RouterError};

pub mod prelude {
    pub use crate::router::ProtocolRouter;
    pub use crate::schedule::{SyncConfig, SyncDue, SyncSchedule};
    pub use crate::state::GameState;
    pub use crate::stats::RouterStats;
    pub use crate::RouterError;
}
