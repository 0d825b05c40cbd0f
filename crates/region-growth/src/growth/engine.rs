//! The growth loop.
//!
//! One run: seed a single random location into the Frontier, then repeat
//! until the Frontier is empty:
//!
//! 1. take a Frontier location (per the [`FrontierPolicy`]),
//! 2. ask the [`ColorSelector`] for its color,
//! 3. write it to the Body and the [`Canvas`],
//! 4. move its Unexplored 8-neighbors into the Frontier.
//!
//! The grid is 8-connected, so a single seed reaches every cell and a run
//! performs exactly `width * height` iterations.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::frontier::{FrontierPolicy, PreferenceField};
use super::observer::GrowthObserver;
use super::region::{CellState, RegionState, RegionStats};
use super::selector::ColorSelector;
use crate::color::Color;
use crate::error::GrowthError;
use crate::grid::{Canvas, GridSize, Location};

/// A single colored cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Zero-based iteration that produced this placement.
    pub iteration: usize,
    pub location: Location,
    pub color: Color,
}

/// Region-growth placement over one grid.
///
/// # Example
///
/// ```
/// use region_growth::palette::generate_palette;
/// use region_growth::{ClosestSelector, GridSize, GrowthEngine};
///
/// let palette = generate_palette(2, 2, 2).unwrap();
/// let size = GridSize::new(8, 8).unwrap();
/// let selector = ClosestSelector::new(palette.into_tree());
///
/// let canvas = GrowthEngine::seeded(size, selector, 7).unwrap().run().unwrap();
/// assert!(canvas.is_complete());
/// ```
#[derive(Debug)]
pub struct GrowthEngine<S> {
    region: RegionState,
    canvas: Canvas,
    selector: S,
    policy: FrontierPolicy,
    field: PreferenceField,
    rng: StdRng,
    iteration: usize,
    seeded: bool,
}

impl<S: ColorSelector> GrowthEngine<S> {
    /// Create an engine for `size` drawing colors from `selector`.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::PaletteSizeMismatch`] unless the selector holds
    /// exactly one color per cell.
    pub fn new(size: GridSize, selector: S, rng: StdRng) -> Result<Self, GrowthError> {
        let palette = selector.remaining();
        if palette != size.area() {
            return Err(GrowthError::PaletteSizeMismatch {
                palette,
                area: size.area(),
            });
        }
        Ok(Self {
            region: RegionState::new(size),
            canvas: Canvas::new(size),
            selector,
            policy: FrontierPolicy::Random,
            field: PreferenceField::Flat,
            rng,
            iteration: 0,
            seeded: false,
        })
    }

    /// [`new`](Self::new) with a `StdRng` seeded from `seed`.
    pub fn seeded(size: GridSize, selector: S, seed: u64) -> Result<Self, GrowthError> {
        Self::new(size, selector, StdRng::seed_from_u64(seed))
    }

    /// Use `policy` to pick Frontier locations.
    ///
    /// Takes effect only before the first [`step`](Self::step).
    pub fn with_frontier_policy(mut self, policy: FrontierPolicy) -> Self {
        if !self.seeded {
            self.field = PreferenceField::for_policy(&policy, &mut self.rng);
            self.policy = policy;
        }
        self
    }

    pub fn region(&self) -> &RegionState {
        &self.region
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn stats(&self) -> RegionStats {
        self.region.stats()
    }

    /// Iterations performed so far.
    pub fn iterations(&self) -> usize {
        self.iteration
    }

    /// Perform one iteration.
    ///
    /// Returns `Ok(None)` once the Frontier is empty, which happens exactly
    /// when every cell has been colored.
    ///
    /// # Errors
    ///
    /// [`GrowthError::PaletteExhausted`] if the selector has no color left
    /// for a Frontier location. The canvas is then partially populated.
    pub fn step(&mut self) -> Result<Option<Placement>, GrowthError> {
        self.seed();
        if self.region.frontier_len() == 0 {
            return Ok(None);
        }

        let index = self.policy.choose(&self.region, &mut self.rng);
        let location = self.region.take_frontier_at(index);
        let color = self
            .selector
            .select(self.region.body(), location, &mut self.rng)
            .ok_or(GrowthError::PaletteExhausted {
                iteration: self.iteration,
            })?;

        self.region.fill(location, color);
        self.canvas.set_pixel(location, color)?;

        let size = self.region.size();
        for neighbor in location.neighbors(size) {
            if self.region.state(neighbor) == CellState::Unexplored {
                let preference = self
                    .field
                    .evaluate(neighbor, self.region.body(), &mut self.rng);
                self.region.discover(neighbor, preference);
            }
        }

        let placement = Placement {
            iteration: self.iteration,
            location,
            color,
        };
        self.iteration += 1;
        Ok(Some(placement))
    }

    /// Run to completion and return the filled canvas.
    pub fn run(self) -> Result<Canvas, GrowthError> {
        self.run_with(&mut ())
    }

    /// Run to completion, reporting every iteration to `observer`.
    pub fn run_with<O>(mut self, observer: &mut O) -> Result<Canvas, GrowthError>
    where
        O: GrowthObserver + ?Sized,
    {
        loop {
            self.seed();
            if self.region.frontier_len() == 0 {
                break;
            }
            observer.before_step(&self.region.stats());
            if let Some(placement) = self.step()? {
                observer.after_step(&placement, &self.canvas);
            }
        }
        observer.finished(&self.canvas);
        Ok(self.canvas)
    }

    fn seed(&mut self) {
        if self.seeded {
            return;
        }
        self.seeded = true;
        let size = self.region.size();
        let start = size.location_at(self.rng.gen_range(0..size.area()));
        let preference = self.field.evaluate(start, self.region.body(), &mut self.rng);
        self.region.discover(start, preference);
    }
}
