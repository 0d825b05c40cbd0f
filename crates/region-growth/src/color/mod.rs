//! Color types
//!
//! Two representations are used by the placement engine:
//!
//! - [`Color`]: an exact 8-bit RGB triple, the unit that is placed on the grid
//! - [`ColorMean`]: a floating-point RGB triple, the average of neighboring
//!   colors that the closest-match selector searches against
//!
//! Averages are kept in `f64` all the way into the distance computation.
//! Truncating the mean to integers first would change which palette entry
//! is nearest and break reproducibility of the tie-break.

use std::fmt;

/// An 8-bit RGB color.
///
/// Ordering is lexicographic over `(r, g, b)`, which is the order palettes
/// are enumerated in. The derived `Ord` relies on the field order below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Color {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Color {
    /// Black, also used for cells that have not been written yet.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Create a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channel value by axis index (0 = red, 1 = green, 2 = blue).
    ///
    /// # Panics
    ///
    /// Panics if `axis > 2`.
    #[inline]
    pub fn channel(self, axis: usize) -> u8 {
        match axis {
            0 => self.r,
            1 => self.g,
            2 => self.b,
            _ => panic!("color axis out of range: {axis}"),
        }
    }

    /// Pack into a `0x00RRGGBB` word (framebuffer layout).
    #[inline]
    pub fn to_u32(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// Squared Euclidean distance to a floating-point target.
    #[inline]
    pub fn distance_squared(self, target: ColorMean) -> f64 {
        let dr = f64::from(self.r) - target.r;
        let dg = f64::from(self.g) - target.g;
        let db = f64::from(self.b) - target.b;
        dr * dr + dg * dg + db * db
    }
}

impl From<[u8; 3]> for Color {
    fn from(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A floating-point RGB triple on the 0..=255 scale.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorMean {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl ColorMean {
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Component-wise arithmetic mean of the given colors.
    ///
    /// Returns `None` for an empty input, which callers treat as
    /// "no placed neighbors".
    pub fn of<I>(colors: I) -> Option<Self>
    where
        I: IntoIterator<Item = Color>,
    {
        let mut sum = [0.0f64; 3];
        let mut count = 0usize;
        for color in colors {
            sum[0] += f64::from(color.r);
            sum[1] += f64::from(color.g);
            sum[2] += f64::from(color.b);
            count += 1;
        }
        if count == 0 {
            return None;
        }
        let n = count as f64;
        Some(Self::new(sum[0] / n, sum[1] / n, sum[2] / n))
    }

    /// Channel value by axis index (0 = red, 1 = green, 2 = blue).
    #[inline]
    pub fn channel(self, axis: usize) -> f64 {
        match axis {
            0 => self.r,
            1 => self.g,
            2 => self.b,
            _ => panic!("color axis out of range: {axis}"),
        }
    }
}

impl From<Color> for ColorMean {
    fn from(color: Color) -> Self {
        Self::new(f64::from(color.r), f64::from(color.g), f64::from(color.b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_lexicographic() {
        let mut colors = vec![
            Color::new(1, 0, 0),
            Color::new(0, 2, 0),
            Color::new(0, 1, 9),
            Color::new(0, 1, 3),
        ];
        colors.sort();
        assert_eq!(
            colors,
            vec![
                Color::new(0, 1, 3),
                Color::new(0, 1, 9),
                Color::new(0, 2, 0),
                Color::new(1, 0, 0),
            ]
        );
    }

    #[test]
    fn test_mean_keeps_fraction() {
        let mean = ColorMean::of([Color::new(1, 0, 0), Color::new(2, 0, 0)]).unwrap();
        assert_eq!(mean.r, 1.5);
        assert_eq!(mean.g, 0.0);
    }

    #[test]
    fn test_mean_of_nothing() {
        assert!(ColorMean::of(std::iter::empty()).is_none());
    }

    #[test]
    fn test_distance_squared() {
        let mean = ColorMean::new(15.0, 0.0, 0.0);
        assert_eq!(Color::new(14, 0, 0).distance_squared(mean), 1.0);
        assert_eq!(Color::new(16, 0, 0).distance_squared(mean), 1.0);
        assert_eq!(Color::new(15, 3, 4).distance_squared(mean), 25.0);
    }

    #[test]
    fn test_display_hex() {
        assert_eq!(Color::new(255, 8, 0).to_string(), "#FF0800");
    }

    #[test]
    fn test_to_u32() {
        assert_eq!(Color::new(0x12, 0x34, 0x56).to_u32(), 0x0012_3456);
    }
}
