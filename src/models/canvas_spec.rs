use region_growth::{GridSize, GrowthError, QuantizationScheme};

/// Canvas dimensions and the palette scheme that fills them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSpec {
    pub width: u32,
    pub height: u32,
    pub scheme: QuantizationScheme,
}

impl CanvasSpec {
    /// 256x128 with 5 bits per channel: 32768 cells, 32768 colors
    pub const DEFAULT: Self = Self {
        width: 256,
        height: 128,
        scheme: QuantizationScheme::RGB555,
    };

    pub fn grid_size(&self) -> Result<GridSize, GrowthError> {
        GridSize::new(self.width, self.height)
    }

    /// Check that the scheme yields exactly one color per cell
    pub fn validate(&self) -> Result<GridSize, GrowthError> {
        let size = self.grid_size()?;
        let palette = self.scheme.cardinality();
        if palette != size.area() {
            return Err(GrowthError::PaletteSizeMismatch {
                palette,
                area: size.area(),
            });
        }
        Ok(size)
    }
}

impl Default for CanvasSpec {
    fn default() -> Self {
        Self::DEFAULT
    }
}
