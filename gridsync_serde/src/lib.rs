/*! # Gridsync Serde

Bit-level IO primitives for the gridsync protocol.

Messages are packed field by field with a [`BitWriter`] and read back with a [`BitReader`];
floating-point fields go through a [`QuantizedRange`] to become fixed-width integer codes.
*/

mod error;
pub mod quantize;
pub mod reader;
pub mod writer;

pub use error::{Result, SerializationError};
pub use quantize::{dequantize, quantize, QuantizedRange};
pub use reader::BitReader;
pub use writer::BitWriter;

/// A type that can be written to and read from a bit stream.
///
/// `Context` carries whatever configuration the layout depends on (for example the quantization
/// ranges); use `()` when the layout is fixed.
pub trait ToBits {
    type Context;

    /// Number of bits [`to_bits`](ToBits::to_bits) writes
    fn bits_len(&self, ctx: &Self::Context) -> usize;

    fn to_bits(&self, writer: &mut BitWriter, ctx: &Self::Context) -> Result<()>;

    fn from_bits(reader: &mut BitReader, ctx: &Self::Context) -> Result<Self>
    where
        Self: Sized;
}

pub mod prelude {
    pub use crate::{BitReader, BitWriter, QuantizedRange, SerializationError, ToBits};
}
