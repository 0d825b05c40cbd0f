//! Raster placement: the sorted palette laid out row by row.

use crate::error::GrowthError;
use crate::grid::{Canvas, GridSize};
use crate::palette::Palette;

/// Fill `size` in raster order (row-major, `x` fastest) with the palette's
/// colors in ascending order.
///
/// No randomness is involved; the result depends only on the palette.
///
/// # Errors
///
/// [`GrowthError::PaletteSizeMismatch`] unless the palette has exactly one
/// color per cell.
///
/// # Example
///
/// ```
/// use region_growth::{place_raster, Color, GridSize, Location, Palette};
///
/// let palette = Palette::from_colors(vec![
///     Color::new(0, 0, 0),
///     Color::new(0, 0, 8),
///     Color::new(0, 8, 0),
///     Color::new(0, 8, 8),
/// ])
/// .unwrap();
/// let canvas = place_raster(GridSize::new(2, 2).unwrap(), &palette).unwrap();
///
/// assert_eq!(canvas.get(Location::new(1, 0)), Some(Color::new(0, 0, 8)));
/// assert_eq!(canvas.get(Location::new(0, 1)), Some(Color::new(0, 8, 0)));
/// ```
pub fn place_raster(size: GridSize, palette: &Palette) -> Result<Canvas, GrowthError> {
    if palette.len() != size.area() {
        return Err(GrowthError::PaletteSizeMismatch {
            palette: palette.len(),
            area: size.area(),
        });
    }

    let mut canvas = Canvas::new(size);
    for (location, color) in size.locations().zip(palette.iter()) {
        canvas.set_pixel(location, color)?;
    }
    Ok(canvas)
}
