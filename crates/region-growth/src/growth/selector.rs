//! Color selection for the growth engine.
//!
//! A [`ColorSelector`] owns the pool of unplaced colors and hands out one
//! color per placement. Every color it returns is removed from its pool, so
//! no color can be placed twice.

use rand::RngCore;

use super::region::Body;
use crate::color::{Color, ColorMean};
use crate::grid::Location;
use crate::palette::{ColorPool, ColorTree, Palette};

/// Picks the color for a location that is about to be filled.
pub trait ColorSelector {
    /// Colors still available.
    fn remaining(&self) -> usize;

    /// Remove and return the color for `location`, or `None` if the pool is
    /// exhausted.
    fn select(&mut self, body: &Body, location: Location, rng: &mut dyn RngCore)
        -> Option<Color>;
}

impl<S: ColorSelector + ?Sized> ColorSelector for Box<S> {
    fn remaining(&self) -> usize {
        (**self).remaining()
    }

    fn select(
        &mut self,
        body: &Body,
        location: Location,
        rng: &mut dyn RngCore,
    ) -> Option<Color> {
        (**self).select(body, location, rng)
    }
}

/// Ignores the neighborhood and hands out colors from the top of the sorted
/// palette down, so the first cell gets the largest color.
#[derive(Debug, Clone)]
pub struct DescendingSelector {
    palette: Palette,
}

impl DescendingSelector {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }
}

impl ColorSelector for DescendingSelector {
    fn remaining(&self) -> usize {
        self.palette.len()
    }

    fn select(&mut self, _body: &Body, _location: Location, _rng: &mut dyn RngCore) -> Option<Color> {
        self.palette.pop_last()
    }
}

/// Picks the remaining color nearest to the mean of the already-placed
/// 8-neighbors.
///
/// With no placed neighbor (only the very first cell of a run) the color is
/// drawn uniformly from the remaining pool instead.
///
/// The pool decides how the nearest color is found: a [`Palette`] scans
/// linearly, a [`ColorTree`] (the default) searches a k-d tree. Both break
/// distance ties toward the smaller color and therefore produce identical
/// runs for the same seed.
#[derive(Debug, Clone)]
pub struct ClosestSelector<P = ColorTree> {
    pool: P,
}

impl<P: ColorPool> ClosestSelector<P> {
    pub fn new(pool: P) -> Self {
        Self { pool }
    }

    /// The remaining pool.
    pub fn into_pool(self) -> P {
        self.pool
    }
}

impl<P: ColorPool> ColorSelector for ClosestSelector<P> {
    fn remaining(&self) -> usize {
        self.pool.remaining()
    }

    fn select(&mut self, body: &Body, location: Location, rng: &mut dyn RngCore) -> Option<Color> {
        match ColorMean::of(body.neighbor_colors(location)) {
            Some(target) => self.pool.pop_nearest(target),
            None => self.pool.pop_random(rng),
        }
    }
}
