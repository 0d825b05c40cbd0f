//! Placement strategies.
//!
//! - [`place_raster`]: the sorted palette in raster order, no randomness
//! - [`GrowthEngine`] with [`DescendingSelector`]: random region growth,
//!   colors in descending order
//! - [`GrowthEngine`] with [`ClosestSelector`]: random region growth, each
//!   color nearest to the mean of its placed neighbors

mod engine;
mod frontier;
mod observer;
mod raster;
mod region;
mod selector;

pub use engine::{GrowthEngine, Placement};
pub use frontier::{FrontierPolicy, Preference};
pub use observer::GrowthObserver;
pub use raster::place_raster;
pub use region::{Body, CellState, RegionState, RegionStats};
pub use selector::{ClosestSelector, ColorSelector, DescendingSelector};
