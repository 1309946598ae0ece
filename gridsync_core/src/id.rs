//! Identifiers for networked entities and for the peers of a session
use core::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

/// Identifier of a networked entity (a player controller).
///
/// Entities are identified by a full `u64` at the API boundary, but only [`EntityId::WIRE_BITS`]
/// bits travel on the wire. The codec rejects identifiers that don't fit (see
/// [`EntityId::fits_wire`]) instead of truncating them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl EntityId {
    /// Width of an entity identifier in the wire format
    pub const WIRE_BITS: u32 = 4;
    /// Largest identifier that can be sent over the wire
    pub const MAX_WIRE: u64 = (1 << Self::WIRE_BITS) - 1;

    pub fn fits_wire(&self) -> bool {
        self.0 <= Self::MAX_WIRE
    }
}

impl From<u64> for EntityId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Display for EntityId {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Identifier of a peer connected to the session, as reported by the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PeerId {
    /// Refers to the authoritative server
    Server,
    /// A client, identified by the id the transport assigned to its connection
    Client(u64),
}

impl Display for PeerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PeerId::Server => write!(f, "Server"),
            PeerId::Client(id) => write!(f, "Client({id})"),
        }
    }
}
