//! Write-once pixel canvas.
//!
//! [`Canvas`] is the output of every placement strategy. Each cell can be
//! written exactly once; the growth engine writes a cell as soon as its color
//! is chosen, so a canvas observed mid-run shows the region grown so far.

use super::location::{GridSize, Location};
use crate::color::Color;
use crate::error::GrowthError;

/// A `width x height` grid of color cells, row-major.
///
/// # Example
///
/// ```
/// use region_growth::{Canvas, Color, GridSize, Location};
///
/// let mut canvas = Canvas::new(GridSize::new(2, 1).unwrap());
/// canvas.set_pixel(Location::new(1, 0), Color::new(255, 0, 0)).unwrap();
///
/// assert_eq!(canvas.filled(), 1);
/// // Unwritten cells render as black.
/// assert_eq!(canvas.to_rgb_bytes(), vec![0, 0, 0, 255, 0, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    size: GridSize,
    cells: Vec<Option<Color>>,
    filled: usize,
}

impl Canvas {
    /// Create an empty canvas.
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![None; size.area()],
            filled: 0,
        }
    }

    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.size.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.size.height()
    }

    /// Number of cells written so far.
    #[inline]
    pub fn filled(&self) -> usize {
        self.filled
    }

    /// Returns true once every cell has been written.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.filled == self.cells.len()
    }

    /// Write a cell.
    ///
    /// # Errors
    ///
    /// - [`GrowthError::OutOfBounds`] if `location` is outside the grid
    /// - [`GrowthError::PixelOverwrite`] if the cell was already written
    pub fn set_pixel(&mut self, location: Location, color: Color) -> Result<(), GrowthError> {
        if !self.size.contains(location) {
            return Err(GrowthError::OutOfBounds {
                location,
                size: self.size,
            });
        }
        let cell = &mut self.cells[self.size.index_of(location)];
        if cell.is_some() {
            return Err(GrowthError::PixelOverwrite { location });
        }
        *cell = Some(color);
        self.filled += 1;
        Ok(())
    }

    /// Color at `location`, or `None` if unwritten or out of bounds.
    #[inline]
    pub fn get(&self, location: Location) -> Option<Color> {
        if !self.size.contains(location) {
            return None;
        }
        self.cells[self.size.index_of(location)]
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[Option<Color>] {
        &self.cells
    }

    /// Flat `[R, G, B, R, G, B, ...]` buffer, unwritten cells as black.
    ///
    /// The returned buffer has length `width * height * 3`.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.cells.len() * 3);
        for cell in &self.cells {
            rgb.extend_from_slice(&cell.unwrap_or(Color::BLACK).to_bytes());
        }
        rgb
    }

    /// `0x00RRGGBB` words, one per cell, for framebuffer-style sinks.
    pub fn to_u32_buffer(&self) -> Vec<u32> {
        self.cells
            .iter()
            .map(|cell| cell.unwrap_or(Color::BLACK).to_u32())
            .collect()
    }
}
