use serde::{Deserialize, Serialize};

/// Role of the local peer in the session.
///
/// Some messages share one wire shape between a request and its response; the role decides which
/// interpretation applies when they are received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// The server: its state is ground truth
    Authoritative,
    /// A client
    Peer,
}

impl Role {
    pub fn is_authoritative(&self) -> bool {
        matches!(self, Role::Authoritative)
    }
}
