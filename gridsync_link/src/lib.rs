/*! # Gridsync Link

Transport boundary of the gridsync protocol.

The protocol only needs to send discrete byte payloads to a set of peers, and to poll the payloads
received from them along with the id of their sender. Reliability, ordering and encryption are left
to the underlying transport.
*/

use std::collections::VecDeque;

use bytes::Bytes;
use gridsync_core::prelude::PeerId;

pub mod crossbeam;
mod error;
pub mod target;

pub use error::LinkError;
pub use target::NetworkTarget;

pub type RecvPayload = Bytes;
pub type SendPayload = Bytes;

/// Delivers byte payloads between the local peer and remote peers
pub trait Transport {
    /// Sends `payload` to every peer of `target`.
    ///
    /// The payload is cloned for each peer, which only bumps its reference count.
    fn send(&mut self, target: &NetworkTarget, payload: SendPayload) -> Result<(), LinkError>;

    /// Returns the next received payload and its sender, if any
    fn recv(&mut self) -> Option<(PeerId, RecvPayload)>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn send(&mut self, target: &NetworkTarget, payload: SendPayload) -> Result<(), LinkError> {
        (**self).send(target, payload)
    }

    fn recv(&mut self) -> Option<(PeerId, RecvPayload)> {
        (**self).recv()
    }
}

/// Buffers the payloads to send and the payloads received.
///
/// The actual IO is done by whoever drains [`Link::send`] and fills [`Link::recv`].
#[derive(Debug, Default)]
pub struct Link {
    /// Payloads to be received
    pub recv: VecDeque<(PeerId, RecvPayload)>,
    /// Payloads to be sent
    pub send: Vec<(NetworkTarget, SendPayload)>,
}

impl Link {
    /// Buffers a payload received from `sender`
    pub fn push_recv(&mut self, sender: PeerId, payload: RecvPayload) {
        self.recv.push_back((sender, payload));
    }

    /// Takes every payload buffered for sending
    pub fn drain_send(&mut self) -> impl Iterator<Item = (NetworkTarget, SendPayload)> + '_ {
        self.send.drain(..)
    }
}

impl Transport for Link {
    fn send(&mut self, target: &NetworkTarget, payload: SendPayload) -> Result<(), LinkError> {
        if !target.is_empty() {
            self.send.push((target.clone(), payload));
        }
        Ok(())
    }

    fn recv(&mut self) -> Option<(PeerId, RecvPayload)> {
        self.recv.pop_front()
    }
}

pub mod prelude {
    pub use crate::crossbeam::CrossbeamIo;
    pub use crate::{Link, LinkError, NetworkTarget, Transport};
}
