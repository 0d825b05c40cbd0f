//! Per-run exploration state: Unexplored, Frontier and Body.
//!
//! Every cell is in exactly one [`CellState`] at a time and only ever moves
//! forward: `Unexplored -> Frontier -> Body`. The state vector is the single
//! source of truth for membership, so the three sets are disjoint by
//! construction.
//!
//! The Frontier is additionally kept as a dense vector with a position index
//! per cell, giving O(1) uniform random removal (swap with the last element
//! and pop) without depending on any set iteration order.

use std::fmt;

use crate::color::Color;
use crate::grid::{GridSize, Location};

const NOT_IN_FRONTIER: usize = usize::MAX;

/// Membership of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Not yet reached by expansion.
    Unexplored,
    /// Adjacent to the Body, waiting for a color.
    Frontier,
    /// Colored.
    Body,
}

/// Set sizes at one point of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegionStats {
    pub body: usize,
    pub frontier: usize,
    pub unexplored: usize,
}

impl RegionStats {
    #[inline]
    pub fn total(&self) -> usize {
        self.body + self.frontier + self.unexplored
    }
}

impl fmt::Display for RegionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Body: {}\tFrontier: {}\tUnexplored: {}",
            self.body, self.frontier, self.unexplored
        )
    }
}

/// Colors placed so far, by location.
#[derive(Debug, Clone)]
pub struct Body {
    size: GridSize,
    colors: Vec<Option<Color>>,
    len: usize,
}

impl Body {
    fn new(size: GridSize) -> Self {
        Self {
            size,
            colors: vec![None; size.area()],
            len: 0,
        }
    }

    /// Color placed at `location`, if any.
    #[inline]
    pub fn get(&self, location: Location) -> Option<Color> {
        if !self.size.contains(location) {
            return None;
        }
        self.colors[self.size.index_of(location)]
    }

    #[inline]
    pub fn contains(&self, location: Location) -> bool {
        self.get(location).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Colors of the already-placed 8-neighbors of `location` (0 to 8).
    pub fn neighbor_colors(&self, location: Location) -> impl Iterator<Item = Color> + '_ {
        location
            .neighbors(self.size)
            .filter_map(move |neighbor| self.get(neighbor))
    }

    fn insert(&mut self, location: Location, color: Color) {
        let slot = &mut self.colors[self.size.index_of(location)];
        debug_assert!(slot.is_none());
        *slot = Some(color);
        self.len += 1;
    }
}

/// Exploration state of one growth run.
#[derive(Debug, Clone)]
pub struct RegionState {
    size: GridSize,
    states: Vec<CellState>,
    frontier: Vec<Location>,
    frontier_pos: Vec<usize>,
    preference: Vec<f64>,
    body: Body,
    unexplored: usize,
}

impl RegionState {
    /// Every cell starts Unexplored.
    pub fn new(size: GridSize) -> Self {
        let area = size.area();
        Self {
            size,
            states: vec![CellState::Unexplored; area],
            frontier: Vec::new(),
            frontier_pos: vec![NOT_IN_FRONTIER; area],
            preference: vec![0.0; area],
            body: Body::new(size),
            unexplored: area,
        }
    }

    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    #[inline]
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Membership of `location`.
    #[inline]
    pub fn state(&self, location: Location) -> CellState {
        self.states[self.size.index_of(location)]
    }

    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Frontier member at dense position `index`.
    #[inline]
    pub fn frontier_at(&self, index: usize) -> Location {
        self.frontier[index]
    }

    /// Preference value recorded when `location` entered the Frontier.
    #[inline]
    pub fn preference(&self, location: Location) -> f64 {
        self.preference[self.size.index_of(location)]
    }

    pub fn stats(&self) -> RegionStats {
        RegionStats {
            body: self.body.len(),
            frontier: self.frontier.len(),
            unexplored: self.unexplored,
        }
    }

    /// Move `location` from Unexplored to Frontier.
    ///
    /// Returns false (and changes nothing) if the location is off-grid or
    /// not Unexplored.
    pub fn discover(&mut self, location: Location, preference: f64) -> bool {
        if !self.size.contains(location) {
            return false;
        }
        let idx = self.size.index_of(location);
        if self.states[idx] != CellState::Unexplored {
            return false;
        }
        self.states[idx] = CellState::Frontier;
        self.preference[idx] = preference;
        self.frontier_pos[idx] = self.frontier.len();
        self.frontier.push(location);
        self.unexplored -= 1;
        true
    }

    /// Remove the Frontier member at dense position `index` for coloring.
    ///
    /// The cell keeps [`CellState::Frontier`] until [`fill`](Self::fill)
    /// moves it into the Body.
    pub fn take_frontier_at(&mut self, index: usize) -> Location {
        let location = self.frontier.swap_remove(index);
        self.frontier_pos[self.size.index_of(location)] = NOT_IN_FRONTIER;
        if let Some(&moved) = self.frontier.get(index) {
            self.frontier_pos[self.size.index_of(moved)] = index;
        }
        location
    }

    /// Record `color` at a location previously taken from the Frontier.
    pub fn fill(&mut self, location: Location, color: Color) {
        let idx = self.size.index_of(location);
        debug_assert_eq!(self.states[idx], CellState::Frontier);
        debug_assert_eq!(self.frontier_pos[idx], NOT_IN_FRONTIER);
        self.states[idx] = CellState::Body;
        self.body.insert(location, color);
    }

    /// Returns true once every cell is in the Body.
    pub fn is_complete(&self) -> bool {
        self.body.len() == self.size.area()
    }
}
