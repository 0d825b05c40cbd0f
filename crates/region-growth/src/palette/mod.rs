//! Palette types and utilities
//!
//! This module provides palette generation by channel quantization and the
//! two destructive color pools the selectors draw from: the sorted
//! [`Palette`] (linear scan) and the [`ColorTree`] k-d index.

mod error;
mod generate;
mod kdtree;
mod palette;
mod pool;

pub use error::{Channel, PaletteError};
pub use generate::{generate_palette, QuantizationScheme};
pub use kdtree::ColorTree;
pub use palette::Palette;
pub use pool::ColorPool;
