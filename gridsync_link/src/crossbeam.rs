//! In-process transport over crossbeam channels
use std::collections::BTreeMap;

use bytes::Bytes;
use crossbeam_channel::{Receiver, Sender, TrySendError};
use gridsync_core::prelude::PeerId;
use tracing::{error, trace};

use crate::{LinkError, NetworkTarget, RecvPayload, SendPayload, Transport};

/// Payload tagged with the id of its sender
pub type Datagram = (PeerId, Bytes);

/// Endpoint of an in-process network.
///
/// Every endpoint owns one inbound channel, and a sender for each remote peer it is linked to.
/// Useful for tests, or to run a server and its clients in a single process.
#[derive(Debug)]
pub struct CrossbeamIo {
    local: PeerId,
    receiver: Receiver<Datagram>,
    /// Inbound channel handle handed out to the peers that link to this endpoint
    inbound: Sender<Datagram>,
    peers: BTreeMap<PeerId, Sender<Datagram>>,
}

impl CrossbeamIo {
    pub fn new(local: PeerId) -> Self {
        let (inbound, receiver) = crossbeam_channel::unbounded();
        Self {
            local,
            receiver,
            inbound,
            peers: BTreeMap::new(),
        }
    }

    /// Create a pair of linked endpoints for local testing
    pub fn new_pair(a: PeerId, b: PeerId) -> (Self, Self) {
        let mut first = Self::new(a);
        let mut second = Self::new(b);
        first.link(&mut second);
        (first, second)
    }

    /// Creates a server endpoint linked to one endpoint per client.
    ///
    /// Clients are only linked to the server, not to each other.
    pub fn star(clients: impl IntoIterator<Item = u64>) -> (Self, Vec<Self>) {
        let mut server = Self::new(PeerId::Server);
        let clients = clients
            .into_iter()
            .map(|id| {
                let mut client = Self::new(PeerId::Client(id));
                server.link(&mut client);
                client
            })
            .collect();
        (server, clients)
    }

    /// Links two endpoints in both directions
    pub fn link(&mut self, other: &mut CrossbeamIo) {
        self.peers.insert(other.local, other.inbound.clone());
        other.peers.insert(self.local, self.inbound.clone());
    }

    /// Forgets the link to `peer`. Returns false if there was none.
    pub fn unlink(&mut self, peer: &PeerId) -> bool {
        self.peers.remove(peer).is_some()
    }

    pub fn local_id(&self) -> PeerId {
        self.local
    }

    pub fn peers(&self) -> impl Iterator<Item = &PeerId> {
        self.peers.keys()
    }

    fn send_to(
        &self,
        peer: PeerId,
        sender: &Sender<Datagram>,
        payload: Bytes,
    ) -> Result<(), LinkError> {
        match sender.try_send((self.local, payload)) {
            Ok(()) => Ok(()),
            Err(TrySendError::Disconnected(_)) => {
                error!(local = %self.local, %peer, "CrossbeamIo channel is disconnected");
                Err(LinkError::Disconnected(peer))
            }
            // unbounded channels are never full
            Err(TrySendError::Full(_)) => Ok(()),
        }
    }
}

impl Transport for CrossbeamIo {
    /// Sends to every linked peer of `target`.
    ///
    /// A failure for one peer does not prevent sending to the others; the first error is returned.
    fn send(&mut self, target: &NetworkTarget, payload: SendPayload) -> Result<(), LinkError> {
        if let Some(unknown) = target
            .named()
            .iter()
            .find(|peer| !self.peers.contains_key(*peer))
        {
            return Err(LinkError::UnknownPeer(*unknown));
        }
        let mut result = Ok(());
        for (peer, sender) in self.peers.iter().filter(|(peer, _)| target.targets(peer)) {
            trace!(local = %self.local, %peer, len = payload.len(), "send payload");
            if let Err(e) = self.send_to(*peer, sender, payload.clone())
                && result.is_ok()
            {
                result = Err(e);
            }
        }
        result
    }

    fn recv(&mut self) -> Option<(PeerId, RecvPayload)> {
        // `inbound` keeps the channel connected, so an error always means it is empty
        self.receiver.try_recv().ok()
    }
}
