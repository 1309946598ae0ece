use gridsync_core::prelude::PeerId;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkError {
    #[error("the channel to {0} is disconnected")]
    Disconnected(PeerId),
    #[error("no link to {0}")]
    UnknownPeer(PeerId),
}
