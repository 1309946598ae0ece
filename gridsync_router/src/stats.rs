/// Counters maintained by the [`ProtocolRouter`](crate::router::ProtocolRouter).
///
/// With the `metrics` feature the same events are also reported as `router/*` counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouterStats {
    /// Messages decoded and dispatched
    pub received: u64,
    /// Inbound buffers that could not be decoded
    pub dropped: u64,
    /// Messages handed to the transport
    pub sent: u64,
    /// Outbound messages that failed to encode or to send
    pub send_errors: u64,
}

impl RouterStats {
    pub(crate) fn record_received(&mut self) {
        self.received += 1;
        #[cfg(feature = "metrics")]
        metrics::counter!("router/received").increment(1);
    }

    pub(crate) fn record_dropped(&mut self) {
        self.dropped += 1;
        #[cfg(feature = "metrics")]
        metrics::counter!("router/dropped").increment(1);
    }

    pub(crate) fn record_sent(&mut self) {
        self.sent += 1;
        #[cfg(feature = "metrics")]
        metrics::counter!("router/sent").increment(1);
    }

    pub(crate) fn record_send_error(&mut self) {
        self.send_errors += 1;
        #[cfg(feature = "metrics")]
        metrics::counter!("router/send_errors").increment(1);
    }
}
