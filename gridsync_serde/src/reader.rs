//! Sequential bit reader
use crate::error::{Result, SerializationError};
use crate::writer::check_width;

/// Sequential cursor over a borrowed byte slice, reading fields written by a
/// [`BitWriter`](crate::BitWriter).
///
/// The reader knows the bit length of the message it reads; reading past it fails with
/// [`SerializationError::Underrun`] and leaves the cursor where it was.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    bytes: &'a [u8],
    bit_len: usize,
    position: usize,
}

impl<'a> BitReader<'a> {
    /// Reads every bit of `bytes`
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            bit_len: bytes.len() * 8,
            position: 0,
        }
    }

    /// Reads at most `bit_len` bits of `bytes`.
    ///
    /// `bit_len` is clamped to the length of the slice.
    pub fn with_bit_len(bytes: &'a [u8], bit_len: usize) -> Self {
        Self {
            bytes,
            bit_len: bit_len.min(bytes.len() * 8),
            position: 0,
        }
    }

    /// Number of bits already consumed
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    pub fn remaining_bits(&self) -> usize {
        self.bit_len - self.position
    }

    /// Returns the next `width` bits as an unsigned integer.
    pub fn read_bits(&mut self, width: u32) -> Result<u64> {
        check_width(width)?;
        let remaining = self.remaining_bits();
        if (width as usize) > remaining {
            return Err(SerializationError::Underrun {
                requested: width,
                remaining,
            });
        }
        let mut value = 0u64;
        let mut left = width;
        while left > 0 {
            let byte = self.bytes[self.position / 8];
            let available = 8 - (self.position % 8) as u32;
            let take = available.min(left);
            let chunk = (byte >> (available - take)) & (((1u16 << take) - 1) as u8);
            value = (value << take) | chunk as u64;
            self.position += take as usize;
            left -= take;
        }
        Ok(value)
    }

    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_bits(1)? == 1)
    }

    pub fn read_nibble(&mut self) -> Result<u8> {
        Ok(self.read_bits(4)? as u8)
    }

    pub fn read_byte(&mut self) -> Result<u8> {
        Ok(self.read_bits(8)? as u8)
    }

    /// Errors with [`SerializationError::Underrun`] unless at least `bits` bits are left.
    ///
    /// Used to validate a whole group of fields before reading any of them.
    pub fn ensure_remaining(&self, bits: usize) -> Result<()> {
        let remaining = self.remaining_bits();
        if bits > remaining {
            return Err(SerializationError::Underrun {
                requested: bits.try_into().unwrap_or(u32::MAX),
                remaining,
            });
        }
        Ok(())
    }
}
