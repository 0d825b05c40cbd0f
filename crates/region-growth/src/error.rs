//! Error type for placement runs.
//!
//! Every variant describes a configuration or precondition violation. None
//! of them is retryable: a run that fails leaves its canvas partially
//! populated and the canvas must be discarded.

use std::fmt;

use crate::grid::{GridSize, Location};

/// Error type for grid construction and placement runs.
#[derive(Debug, Clone, PartialEq)]
pub enum GrowthError {
    /// Grid with a zero dimension
    EmptyGrid {
        width: u32,
        height: u32,
    },
    /// Palette cardinality differs from the grid area
    PaletteSizeMismatch {
        /// Colors available
        palette: usize,
        /// Cells to fill
        area: usize,
    },
    /// The selector ran out of colors before the frontier emptied
    PaletteExhausted {
        /// Zero-based iteration at which no color was available
        iteration: usize,
    },
    /// A canvas cell was written twice
    PixelOverwrite {
        location: Location,
    },
    /// A canvas write outside the grid
    OutOfBounds {
        location: Location,
        size: GridSize,
    },
}

impl fmt::Display for GrowthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrowthError::EmptyGrid { width, height } => {
                write!(f, "grid must not be empty (got {}x{})", width, height)
            }
            GrowthError::PaletteSizeMismatch { palette, area } => {
                write!(
                    f,
                    "palette has {} colors but the grid has {} cells; \
                     quantization scheme and grid dimensions must match",
                    palette, area
                )
            }
            GrowthError::PaletteExhausted { iteration } => {
                write!(f, "palette exhausted at iteration {}", iteration)
            }
            GrowthError::PixelOverwrite { location } => {
                write!(f, "pixel {} written twice", location)
            }
            GrowthError::OutOfBounds { location, size } => {
                write!(f, "pixel {} outside {} grid", location, size)
            }
        }
    }
}

impl std::error::Error for GrowthError {}
