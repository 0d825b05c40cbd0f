//! growth-image
//!
//! Renders a 256x128 image that uses every color of a 15-bit RGB palette
//! exactly once, by raster placement or by growing a region from a random
//! seed. This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
