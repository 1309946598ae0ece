use gridsync_core::prelude::PeerId;

/// Set of peers a message is sent to
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub enum NetworkTarget {
    #[default]
    /// Message sent to no peer
    None,
    /// Message sent to all peers except one
    AllExceptSingle(PeerId),
    /// Message sent to all peers except for these
    AllExcept(Vec<PeerId>),
    /// Message sent to all peers
    All,
    /// Message sent to only these
    Only(Vec<PeerId>),
    /// Message sent to only this one peer
    Single(PeerId),
}

impl FromIterator<PeerId> for NetworkTarget {
    fn from_iter<T: IntoIterator<Item = PeerId>>(iter: T) -> Self {
        let peers: Vec<PeerId> = iter.into_iter().collect();
        NetworkTarget::from(peers)
    }
}

impl From<Vec<PeerId>> for NetworkTarget {
    fn from(value: Vec<PeerId>) -> Self {
        match value.len() {
            0 => NetworkTarget::None,
            1 => NetworkTarget::Single(value[0]),
            _ => NetworkTarget::Only(value),
        }
    }
}

impl NetworkTarget {
    /// Returns true if the target is empty
    pub fn is_empty(&self) -> bool {
        match self {
            NetworkTarget::None => true,
            NetworkTarget::Only(ids) => ids.is_empty(),
            _ => false,
        }
    }

    pub fn from_exclude(peers: impl IntoIterator<Item = PeerId>) -> Self {
        let peers = peers.into_iter().collect::<Vec<_>>();
        match peers.len() {
            0 => NetworkTarget::All,
            1 => NetworkTarget::AllExceptSingle(peers[0]),
            _ => NetworkTarget::AllExcept(peers),
        }
    }

    /// Return true if the message should be sent to `peer`
    pub fn targets(&self, peer: &PeerId) -> bool {
        match self {
            NetworkTarget::All => true,
            NetworkTarget::AllExceptSingle(single) => peer != single,
            NetworkTarget::AllExcept(peers) => !peers.contains(peer),
            NetworkTarget::Only(peers) => peers.contains(peer),
            NetworkTarget::Single(single) => peer == single,
            NetworkTarget::None => false,
        }
    }

    /// Peers that are named explicitly by the target
    pub(crate) fn named(&self) -> &[PeerId] {
        match self {
            NetworkTarget::Only(peers) => peers,
            NetworkTarget::Single(peer) => core::slice::from_ref(peer),
            _ => &[],
        }
    }
}
