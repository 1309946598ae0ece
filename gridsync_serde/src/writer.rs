//! Append-only bit writer
use bytes::{BufMut, Bytes, BytesMut};
use tracing::trace;

use crate::error::{Result, SerializationError};

/// Maximum width of a single field
pub const MAX_FIELD_BITS: u32 = 64;

/// Append-only cursor that packs fields of 1 to 64 bits into a byte buffer.
///
/// Fields are written most-significant-bit first, and consecutive fields are packed without
/// any alignment. [`BitWriter::finish`] pads the last byte with zero bits.
///
/// Invalid writes (a width outside of `1..=64`, or a value that doesn't fit in the width) are
/// rejected, never masked.
#[derive(Debug, Default, Clone)]
pub struct BitWriter {
    buffer: BytesMut,
    bit_len: usize,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer that can hold `capacity` bytes before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: BytesMut::with_capacity(capacity),
            bit_len: 0,
        }
    }

    /// Number of bits written so far
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Number of bytes the finished buffer will contain
    pub fn byte_len(&self) -> usize {
        self.buffer.len()
    }

    /// Appends the `width` low-order bits of `value`.
    pub fn write_bits(&mut self, value: u64, width: u32) -> Result<()> {
        check_width(width)?;
        if width < MAX_FIELD_BITS && value >> width != 0 {
            return Err(SerializationError::ValueOverflow { value, width });
        }
        let mut remaining = width;
        while remaining > 0 {
            let offset = (self.bit_len % 8) as u32;
            if offset == 0 {
                self.buffer.put_u8(0);
            }
            let free = 8 - offset;
            let take = free.min(remaining);
            // the top `take` bits of what is left of the field
            let chunk = ((value >> (remaining - take)) & ((1u64 << take) - 1)) as u8;
            let last = self.buffer.len() - 1;
            self.buffer[last] |= chunk << (free - take);
            self.bit_len += take as usize;
            remaining -= take;
        }
        Ok(())
    }

    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_bits(value as u64, 1)
    }

    pub fn write_nibble(&mut self, value: u8) -> Result<()> {
        self.write_bits(value as u64, 4)
    }

    pub fn write_byte(&mut self, value: u8) -> Result<()> {
        self.write_bits(value as u64, 8)
    }

    /// Pads the current position to a byte boundary with zero bits and returns the buffer.
    pub fn finish(self) -> Bytes {
        trace!(bits = self.bit_len, bytes = self.buffer.len(), "finished bit buffer");
        // unwritten bits of the last byte are already zero
        self.buffer.freeze()
    }
}

pub(crate) fn check_width(width: u32) -> Result<()> {
    if width == 0 || width > MAX_FIELD_BITS {
        return Err(SerializationError::InvalidWidth(width));
    }
    Ok(())
}
