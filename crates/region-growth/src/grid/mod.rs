//! Grid geometry and the output canvas.

mod canvas;
mod location;

pub use canvas::Canvas;
pub use location::{GridSize, Location, NEIGHBOR_OFFSETS};
