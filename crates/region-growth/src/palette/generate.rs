//! Palette generation by channel quantization.
//!
//! Each channel is reduced to `bits` significant bits; the quantized value of
//! level `k` is `k << (8 - bits)`, i.e. the level occupies the top bits of the
//! byte and the low bits are zero. A 5-bit channel therefore takes the values
//! `0, 8, 16, ..., 248`.

use super::error::{Channel, PaletteError};
use super::palette::Palette;
use crate::color::Color;

/// Per-channel bit depths of a quantized palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantizationScheme {
    pub red_bits: u8,
    pub green_bits: u8,
    pub blue_bits: u8,
}

impl QuantizationScheme {
    /// 5 bits per channel: 32768 colors, one per pixel of a 256x128 grid.
    pub const RGB555: Self = Self::new(5, 5, 5);

    pub const fn new(red_bits: u8, green_bits: u8, blue_bits: u8) -> Self {
        Self {
            red_bits,
            green_bits,
            blue_bits,
        }
    }

    /// Number of distinct colors the scheme produces.
    pub fn cardinality(&self) -> usize {
        1usize << (u32::from(self.red_bits) + u32::from(self.green_bits) + u32::from(self.blue_bits))
    }

    /// Generate the palette for this scheme.
    pub fn generate(&self) -> Result<Palette, PaletteError> {
        generate_palette(self.red_bits, self.green_bits, self.blue_bits)
    }
}

impl Default for QuantizationScheme {
    fn default() -> Self {
        Self::RGB555
    }
}

/// Produce every distinct quantized color for the given channel depths.
///
/// The result is sorted ascending (lexicographic RGB) and has exactly
/// `2^(red_bits + green_bits + blue_bits)` entries.
///
/// # Errors
///
/// Returns [`PaletteError::InvalidChannelDepth`] if any depth is outside
/// `1..=8`.
///
/// # Example
///
/// ```
/// use region_growth::palette::generate_palette;
///
/// let palette = generate_palette(1, 1, 1).unwrap();
/// assert_eq!(palette.len(), 8);
/// ```
pub fn generate_palette(
    red_bits: u8,
    green_bits: u8,
    blue_bits: u8,
) -> Result<Palette, PaletteError> {
    let reds = channel_levels(Channel::Red, red_bits)?;
    let greens = channel_levels(Channel::Green, green_bits)?;
    let blues = channel_levels(Channel::Blue, blue_bits)?;

    // Nested loops in r, g, b order emit colors already sorted.
    let mut colors = Vec::with_capacity(reds.len() * greens.len() * blues.len());
    for &r in &reds {
        for &g in &greens {
            for &b in &blues {
                colors.push(Color::new(r, g, b));
            }
        }
    }

    Ok(Palette::from_sorted_unique(colors))
}

/// All quantized values of one channel, ascending.
fn channel_levels(channel: Channel, bits: u8) -> Result<Vec<u8>, PaletteError> {
    if !(1..=8).contains(&bits) {
        return Err(PaletteError::InvalidChannelDepth { channel, bits });
    }
    let shift = 8 - u32::from(bits);
    Ok((0u32..(1 << bits)).map(|level| (level << shift) as u8).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb555_matches_grid() {
        let palette = QuantizationScheme::RGB555.generate().unwrap();
        assert_eq!(palette.len(), 256 * 128);
        assert_eq!(QuantizationScheme::RGB555.cardinality(), 32768);
    }

    #[test]
    fn test_levels_occupy_top_bits() {
        let palette = generate_palette(5, 5, 5).unwrap();
        assert!(palette
            .iter()
            .all(|c| c.r & 0x07 == 0 && c.g & 0x07 == 0 && c.b & 0x07 == 0));
        assert_eq!(palette.first(), Some(Color::new(0, 0, 0)));
        assert_eq!(palette.last(), Some(Color::new(248, 248, 248)));
    }

    #[test]
    fn test_mixed_depths() {
        let palette = generate_palette(1, 2, 8).unwrap();
        assert_eq!(palette.len(), 2 * 4 * 256);
        assert!(palette.contains(Color::new(128, 192, 255)));
        assert!(!palette.contains(Color::new(64, 0, 0)));
    }

    #[test]
    fn test_sorted_ascending() {
        let palette = generate_palette(2, 3, 2).unwrap();
        let colors: Vec<Color> = palette.iter().collect();
        assert!(colors.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_invalid_depths() {
        assert_eq!(
            generate_palette(0, 5, 5).unwrap_err(),
            PaletteError::InvalidChannelDepth {
                channel: Channel::Red,
                bits: 0
            }
        );
        assert_eq!(
            generate_palette(5, 5, 9).unwrap_err(),
            PaletteError::InvalidChannelDepth {
                channel: Channel::Blue,
                bits: 9
            }
        );
    }
}
