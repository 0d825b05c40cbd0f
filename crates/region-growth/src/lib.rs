#![allow(clippy::module_inception)]

//! region-growth: place every color of a quantized palette exactly once
//!
//! This library fills a pixel grid with a palette whose cardinality equals
//! the grid area, so every cell receives a distinct color and every color is
//! used once. Three placement strategies are provided.
//!
//! # Quick Start
//!
//! ```
//! use region_growth::{ClosestSelector, GridSize, GrowthEngine, QuantizationScheme};
//!
//! // 2 bits per channel: 64 colors for an 8x8 grid.
//! let palette = QuantizationScheme::new(2, 2, 2).generate().unwrap();
//! let size = GridSize::new(8, 8).unwrap();
//!
//! let engine = GrowthEngine::seeded(size, ClosestSelector::new(palette.into_tree()), 42).unwrap();
//! let canvas = engine.run().unwrap();
//!
//! assert!(canvas.is_complete());
//! assert_eq!(canvas.to_rgb_bytes().len(), 8 * 8 * 3);
//! ```
//!
//! # Strategies
//!
//! - [`place_raster`]: the ascending palette written row by row. Fully
//!   deterministic.
//! - [`GrowthEngine`] + [`DescendingSelector`]: a region grown from one
//!   random seed cell, colored from the largest palette color downward.
//! - [`GrowthEngine`] + [`ClosestSelector`]: the same growth, but each cell
//!   takes the remaining color nearest (squared Euclidean RGB distance) to
//!   the mean of its already-colored 8-neighbors.
//!
//! # Region Growth
//!
//! Every cell is in exactly one of three states:
//!
//! ```text
//! Unexplored ──discover──> Frontier ──fill──> Body
//! ```
//!
//! One iteration takes a Frontier cell, colors it, and discovers its
//! Unexplored 8-neighbors. The 8-connected grid guarantees that a single seed
//! reaches every cell, so a run on a `W x H` grid takes exactly `W * H`
//! iterations. The seed, the Frontier draws and the closest-color fallback
//! all come from one `StdRng`, so a run is reproducible from its seed.
//!
//! Which Frontier cell comes next is a [`FrontierPolicy`]: uniform by
//! default, or the best of several samples scored by a [`Preference`]
//! (distance to a goal cell or [`PerlinNoise`]).
//!
//! # Nearest-Color Search
//!
//! [`ClosestSelector`] works over any [`ColorPool`]. [`Palette`] scans
//! linearly; [`ColorTree`] is a k-d tree with deletion. Both resolve equal
//! distances toward the smaller color in `(r, g, b)` order, so swapping one
//! for the other never changes a run's output.

pub mod color;
pub mod error;
pub mod grid;
pub mod growth;
pub mod noise;
pub mod palette;


pub use color::{Color, ColorMean};
pub use error::GrowthError;
pub use grid::{Canvas, GridSize, Location};
pub use growth::{
    place_raster, Body, CellState, ClosestSelector, ColorSelector, DescendingSelector,
    FrontierPolicy, GrowthEngine, GrowthObserver, Placement, Preference, RegionState,
    RegionStats,
};
pub use noise::PerlinNoise;
pub use palette::{ColorPool, ColorTree, Palette, PaletteError, QuantizationScheme};
