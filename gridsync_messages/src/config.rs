//! Settings of the [`MessageCodec`](crate::codec::MessageCodec)
use gridsync_serde::{QuantizedRange, SerializationError};
use serde::{Deserialize, Serialize};

/// Quantization ranges of the continuous fields
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuantizationConfig {
    pub position: QuantizedRange,
    pub rotation: QuantizedRange,
    pub color: QuantizedRange,
}

impl Default for QuantizationConfig {
    fn default() -> Self {
        Self {
            position: QuantizedRange::POSITION,
            rotation: QuantizedRange::ROTATION,
            color: QuantizedRange::COLOR,
        }
    }
}

impl QuantizationConfig {
    pub fn validate(&self) -> Result<(), SerializationError> {
        self.position.validate()?;
        self.rotation.validate()?;
        self.color.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    pub quantization: QuantizationConfig,
    /// Reject decoded cell indices that fall outside of the map
    pub check_bounds: bool,
    /// Number of cells of the map. With `check_bounds`, decoded cell indices must be lower.
    pub grid_cells: Option<u16>,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            quantization: QuantizationConfig::default(),
            check_bounds: true,
            grid_cells: None,
        }
    }
}

impl CodecConfig {
    /// Largest grid whose cell indices fit in the 8-bit wire field
    pub const MAX_GRID_CELLS: u16 = 256;

    pub fn with_grid_cells(mut self, cells: u16) -> Self {
        self.grid_cells = Some(cells);
        self
    }

    pub fn with_check_bounds(mut self, check_bounds: bool) -> Self {
        self.check_bounds = check_bounds;
        self
    }

    pub fn validate(&self) -> Result<(), SerializationError> {
        self.quantization.validate()?;
        if let Some(cells) = self.grid_cells
            && (cells == 0 || cells > Self::MAX_GRID_CELLS)
        {
            return Err(SerializationError::OutOfRange {
                field: "grid cells",
                value: cells as f64,
            });
        }
        Ok(())
    }
}
