//! The [`ColorPool`] trait: a destructively consumed set of colors that can
//! answer nearest-color queries.

use rand::RngCore;

use crate::color::{Color, ColorMean};

/// A set of remaining colors supporting destructive selection.
///
/// Implementations must agree exactly on [`pop_nearest`](Self::pop_nearest):
/// the color with the smallest squared distance to the target, ties going
/// to the smallest color in lexicographic `(r, g, b)` order.
pub trait ColorPool {
    /// Number of colors still available.
    fn remaining(&self) -> usize;

    /// Remove and return the remaining color nearest to `target`.
    fn pop_nearest(&mut self, target: ColorMean) -> Option<Color>;

    /// Remove and return a uniformly random remaining color.
    ///
    /// Implementations draw one `usize` rank in `0..remaining` and take the
    /// color at that rank in ascending order, so every pool returns the same
    /// color for the same generator state.
    fn pop_random(&mut self, rng: &mut dyn RngCore) -> Option<Color>;
}
