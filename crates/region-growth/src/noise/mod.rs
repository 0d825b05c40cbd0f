//! Procedural noise used for location preferences.

mod perlin;

pub use perlin::PerlinNoise;
