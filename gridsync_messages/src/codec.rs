//! Encoding and decoding of whole messages
use bytes::Bytes;
use gridsync_serde::{BitReader, BitWriter, ToBits};
use tracing::trace;

use crate::config::CodecConfig;
use crate::error::{DecodeError, EncodeError};
use crate::message::Message;
use crate::payload::MAX_ROSTER_LEN;

/// Converts [`Message`]s to and from their bit-packed wire form.
///
/// Every buffer starts with the 4-bit [`MessageKind`](crate::kind::MessageKind) tag, followed by
/// the fields of the kind in a fixed order. There is no length prefix; the last byte is padded
/// with zero bits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageCodec {
    config: CodecConfig,
}

impl MessageCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Number of bits of the encoded message, before padding
    pub fn encoded_bits(&self, message: &Message) -> usize {
        message.bits_len(&self.config)
    }

    pub fn encode(&self, message: &Message) -> Result<Bytes, EncodeError> {
        if let Some(len) = message.roster_len()
            && len > MAX_ROSTER_LEN
        {
            return Err(EncodeError::RosterTooLong {
                len,
                max: MAX_ROSTER_LEN,
            });
        }
        let bits = self.encoded_bits(message);
        let mut writer = BitWriter::with_capacity(bits.div_ceil(8));
        message.to_bits(&mut writer, &self.config)?;
        trace!(kind = ?message.kind(), bits, "encoded message");
        Ok(writer.finish())
    }

    /// Decodes one message from `bytes`.
    ///
    /// Bits left after the message (the padding) are ignored.
    pub fn decode(&self, bytes: &[u8]) -> Result<Message, DecodeError> {
        let mut reader = BitReader::new(bytes);
        let message = Message::from_bits(&mut reader, &self.config)?;
        trace!(kind = ?message.kind(), bits = reader.position(), "decoded message");
        Ok(message)
    }
}
