//! Sorted palette with destructive selection.
//!
//! [`Palette`] keeps its remaining colors in ascending lexicographic order.
//! Every removal preserves that order, so "the last element" is always the
//! maximum remaining color and a linear nearest-color scan visits candidates
//! in enumeration order (the order the tie-break is defined against).

use rand::{Rng, RngCore};

use super::error::PaletteError;
use super::kdtree::ColorTree;
use super::pool::ColorPool;
use crate::color::{Color, ColorMean};

/// A set of unique colors, consumed one at a time by a placement run.
///
/// # Example
///
/// ```
/// use region_growth::{Color, Palette};
///
/// let mut palette = Palette::from_colors([
///     Color::new(3, 3, 3),
///     Color::new(1, 1, 1),
///     Color::new(3, 3, 3),
/// ]).unwrap();
///
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.pop_last(), Some(Color::new(3, 3, 3)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Build a palette from arbitrary colors, sorting and dropping duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Empty`] if no colors are given.
    pub fn from_colors<I>(colors: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = Color>,
    {
        let mut colors: Vec<Color> = colors.into_iter().collect();
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        colors.sort_unstable();
        colors.dedup();
        Ok(Self { colors })
    }

    /// Wrap colors that are already sorted and unique.
    pub(crate) fn from_sorted_unique(colors: Vec<Color>) -> Self {
        debug_assert!(
            colors.windows(2).all(|w| w[0] < w[1]),
            "palette colors must be strictly ascending"
        );
        Self { colors }
    }

    /// Number of colors remaining.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true once every color has been consumed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterate over the remaining colors in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().copied()
    }

    /// Remaining colors as an ascending slice.
    #[inline]
    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }

    #[inline]
    pub fn first(&self) -> Option<Color> {
        self.colors.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<Color> {
        self.colors.last().copied()
    }

    /// Membership test (binary search).
    pub fn contains(&self, color: Color) -> bool {
        self.colors.binary_search(&color).is_ok()
    }

    /// Remove a specific color. Returns false if it was not present.
    pub fn remove(&mut self, color: Color) -> bool {
        match self.colors.binary_search(&color) {
            Ok(idx) => {
                self.colors.remove(idx);
                true
            }
            Err(_) => false,
        }
    }

    /// Remove and return the maximum remaining color.
    #[inline]
    pub fn pop_last(&mut self) -> Option<Color> {
        self.colors.pop()
    }

    /// Find the color nearest to `target` without removing it.
    ///
    /// Returns `(index, color, squared distance)`. Linear scan in ascending
    /// order with a strict `<` comparison, so among equidistant colors the
    /// first one in enumeration order wins.
    pub fn nearest(&self, target: ColorMean) -> Option<(usize, Color, f64)> {
        let mut best: Option<(usize, Color, f64)> = None;
        for (idx, &color) in self.colors.iter().enumerate() {
            let dist = color.distance_squared(target);
            match best {
                Some((_, _, best_dist)) if dist >= best_dist => {}
                _ => best = Some((idx, color, dist)),
            }
        }
        best
    }

    /// Convert into a k-d tree holding the same remaining colors.
    pub fn into_tree(self) -> ColorTree {
        ColorTree::new(self.colors)
    }

    /// Consume the palette and return the remaining colors, ascending.
    pub fn into_colors(self) -> Vec<Color> {
        self.colors
    }
}

impl ColorPool for Palette {
    fn remaining(&self) -> usize {
        self.len()
    }

    /// O(remaining) per call.
    fn pop_nearest(&mut self, target: ColorMean) -> Option<Color> {
        let (idx, color, _) = self.nearest(target)?;
        self.colors.remove(idx);
        Some(color)
    }

    fn pop_random(&mut self, rng: &mut dyn RngCore) -> Option<Color> {
        if self.colors.is_empty() {
            return None;
        }
        let idx = rng.gen_range(0..self.colors.len());
        Some(self.colors.remove(idx))
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}
