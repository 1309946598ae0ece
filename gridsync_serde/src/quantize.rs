//! Lossy mapping of bounded real values to fixed-width integer codes.
//!
//! A [`QuantizedRange`] maps `[min, max]` linearly onto the codes `0..=2^bits - 1`:
//!
//! ```text
//! code  = round((value - min) / (max - min) * (2^bits - 1))
//! value = min + code / (2^bits - 1) * (max - min)
//! ```
//!
//! Rounding is half away from zero. Decoding a code always lands within one
//! [`step`](QuantizedRange::step) of the value that produced it.
//!
//! Values outside of the domain are rejected rather than clamped; callers that want clamping
//! use [`QuantizedRange::clamp`] first.
use serde::{Deserialize, Serialize};

use crate::error::{Result, SerializationError};
use crate::reader::BitReader;
use crate::writer::{BitWriter, MAX_FIELD_BITS};

/// Linear quantization of the domain `[min, max]` onto `bits`-wide codes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantizedRange {
    pub min: f32,
    pub max: f32,
    pub bits: u32,
}

impl QuantizedRange {
    /// World coordinates of the play area
    pub const POSITION: Self = Self::new(-15.0, 25.0, 13);
    /// Euler angles in degrees
    pub const ROTATION: Self = Self::new(0.0, 360.0, 13);
    /// Normalized color channel
    pub const COLOR: Self = Self::new(0.0, 1.0, 8);

    pub const fn new(min: f32, max: f32, bits: u32) -> Self {
        Self { min, max, bits }
    }

    /// Checks that the range can be used for quantization
    pub fn validate(&self) -> Result<()> {
        if self.bits == 0 || self.bits > MAX_FIELD_BITS {
            return Err(SerializationError::InvalidWidth(self.bits));
        }
        if !(self.min.is_finite() && self.max.is_finite() && self.min < self.max) {
            return Err(SerializationError::OutOfRange {
                field: "quantized range",
                value: self.max as f64 - self.min as f64,
            });
        }
        Ok(())
    }

    /// Largest code representable with `bits` bits: `2^bits - 1`
    pub fn max_code(&self) -> u64 {
        if self.bits >= MAX_FIELD_BITS {
            u64::MAX
        } else {
            (1u64 << self.bits) - 1
        }
    }

    /// Distance between two consecutive decoded values
    pub fn step(&self) -> f32 {
        ((self.max as f64 - self.min as f64) / self.max_code() as f64) as f32
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Maps `value` to its code.
    ///
    /// Fails with [`SerializationError::OutOfDomain`] if `value` is outside of `[min, max]` or NaN.
    pub fn quantize(&self, value: f32) -> Result<u64> {
        if !self.contains(value) {
            return Err(SerializationError::OutOfDomain {
                value,
                min: self.min,
                max: self.max,
            });
        }
        let ratio = (value as f64 - self.min as f64) / (self.max as f64 - self.min as f64);
        // f64::round rounds half away from zero
        let code = (ratio * self.max_code() as f64).round() as u64;
        Ok(code.min(self.max_code()))
    }

    /// Maps a code back to the domain.
    ///
    /// Codes larger than [`max_code`](Self::max_code) decode to values past `max`.
    pub fn dequantize(&self, code: u64) -> f32 {
        let ratio = code as f64 / self.max_code() as f64;
        (self.min as f64 + ratio * (self.max as f64 - self.min as f64)) as f32
    }

    /// Quantizes `value` and writes its code with `bits` bits
    pub fn write(&self, value: f32, writer: &mut BitWriter) -> Result<()> {
        let code = self.quantize(value)?;
        writer.write_bits(code, self.bits)
    }

    /// Reads a `bits`-wide code and dequantizes it
    pub fn read(&self, reader: &mut BitReader) -> Result<f32> {
        let code = reader.read_bits(self.bits)?;
        Ok(self.dequantize(code))
    }
}

/// Maps `value` in `[min, max]` to a `bits`-wide code. See [`QuantizedRange::quantize`].
pub fn quantize(value: f32, min: f32, max: f32, bits: u32) -> Result<u64> {
    let range = QuantizedRange::new(min, max, bits);
    range.validate()?;
    range.quantize(value)
}

/// Inverse of [`quantize`]. See [`QuantizedRange::dequantize`].
pub fn dequantize(code: u64, min: f32, max: f32, bits: u32) -> Result<f32> {
    let range = QuantizedRange::new(min, max, bits);
    range.validate()?;
    Ok(range.dequantize(code))
}
