/// The error returned when writing to or reading from a bit stream fails.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum SerializationError {
    #[error("bit width {0} is outside of 1..=64")]
    InvalidWidth(u32),
    #[error("value {value:#x} does not fit in {width} bits")]
    ValueOverflow { value: u64, width: u32 },
    #[error("attempted to read {requested} bits with only {remaining} remaining")]
    Underrun { requested: u32, remaining: usize },
    /// The value to quantize lies outside of the configured domain. Quantization never clamps.
    #[error("value {value} is outside of the quantized domain [{min}, {max}]")]
    OutOfDomain { value: f32, min: f32, max: f32 },
    /// The leading tag of a tagged value is not a known variant
    #[error("unknown tag {0}")]
    UnknownTag(u8),
    /// A decoded value failed a bounds check.
    #[error("decoded {field} value {value} is out of range")]
    OutOfRange { field: &'static str, value: f64 },
}

pub type Result<T> = core::result::Result<T, SerializationError>;
