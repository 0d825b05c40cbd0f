//! 2-D Perlin gradient noise with octave summation.
//!
//! # Algorithm
//!
//! A 256-entry table of random unit gradients is indexed through a shuffled
//! permutation, hashing lattice corner `(i, j)` to a gradient. For a sample
//! point the four surrounding corner gradients are dotted with the offset to
//! the point and blended with the quintic fade curve `6t^5 - 15t^4 + 10t^3`
//! (zero first and second derivative at the lattice, so no visible grid
//! creases).
//!
//! Octaves are summed with halving amplitude and doubling frequency:
//!
//! ```text
//! noise(p) = sum_{k < octaves} 0.5^k * base(p * 2^k / grid_size)
//! ```
//!
//! A single octave is bounded by `sqrt(2)/2`, so the sum stays within
//! `(-sqrt(2), sqrt(2))` for any octave count.

use std::f64::consts::TAU;

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

const TABLE_SIZE: usize = 256;

/// Seeded 2-D Perlin noise field.
///
/// # Example
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use region_growth::PerlinNoise;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let noise = PerlinNoise::new(&mut rng).with_grid_size(50.0).with_octaves(7);
///
/// let v = noise.sample(12.0, 34.0);
/// assert!(v.abs() < 1.5);
/// ```
#[derive(Debug, Clone)]
pub struct PerlinNoise {
    gradients: [(f64, f64); TABLE_SIZE],
    permutation: [u8; TABLE_SIZE],
    octaves: u32,
    grid_size: f64,
}

impl PerlinNoise {
    /// Draw gradients and permutation from `rng`. One octave, grid size 1.
    pub fn new(rng: &mut dyn RngCore) -> Self {
        let mut gradients = [(0.0, 0.0); TABLE_SIZE];
        for gradient in gradients.iter_mut() {
            let theta = rng.gen_range(0.0..TAU);
            *gradient = (theta.cos(), theta.sin());
        }

        let mut permutation = [0u8; TABLE_SIZE];
        for (i, p) in permutation.iter_mut().enumerate() {
            *p = i as u8;
        }
        permutation.shuffle(rng);

        Self {
            gradients,
            permutation,
            octaves: 1,
            grid_size: 1.0,
        }
    }

    /// Number of octaves to sum (at least 1).
    pub fn with_octaves(mut self, octaves: u32) -> Self {
        self.octaves = octaves.max(1);
        self
    }

    /// Size in pixels of the coarsest lattice cell. Non-positive values are
    /// replaced by 1.
    pub fn with_grid_size(mut self, grid_size: f64) -> Self {
        self.grid_size = if grid_size > 0.0 { grid_size } else { 1.0 };
        self
    }

    #[inline]
    pub fn octaves(&self) -> u32 {
        self.octaves
    }

    #[inline]
    pub fn grid_size(&self) -> f64 {
        self.grid_size
    }

    /// Noise value at pixel coordinate `(x, y)`.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let mut px = x / self.grid_size;
        let mut py = y / self.grid_size;
        let mut amplitude = 1.0;
        let mut total = 0.0;
        for _ in 0..self.octaves {
            total += amplitude * self.base(px, py);
            amplitude *= 0.5;
            px *= 2.0;
            py *= 2.0;
        }
        total
    }

    /// Single-octave noise in lattice units.
    fn base(&self, x: f64, y: f64) -> f64 {
        let i = x.floor();
        let j = y.floor();
        let fx = x - i;
        let fy = y - j;
        let (i, j) = (i as i64, j as i64);

        let dot = |gi: i64, gj: i64, ox: f64, oy: f64| {
            let (gx, gy) = self.gradient_at(gi, gj);
            gx * ox + gy * oy
        };

        let v00 = dot(i, j, fx, fy);
        let v01 = dot(i, j + 1, fx, fy - 1.0);
        let v10 = dot(i + 1, j, fx - 1.0, fy);
        let v11 = dot(i + 1, j + 1, fx - 1.0, fy - 1.0);

        let v0 = interpolate(v00, v01, fy);
        let v1 = interpolate(v10, v11, fy);
        interpolate(v0, v1, fx)
    }

    fn gradient_at(&self, i: i64, j: i64) -> (f64, f64) {
        let hashed = self.permutation[i.rem_euclid(TABLE_SIZE as i64) as usize] as i64;
        let hashed = self.permutation[(hashed + j).rem_euclid(TABLE_SIZE as i64) as usize];
        self.gradients[hashed as usize]
    }
}

/// Blend `v0` and `v1` with the quintic fade of `t`.
#[inline]
fn interpolate(v0: f64, v1: f64, t: f64) -> f64 {
    let t = t * t * t * (10.0 + t * (-15.0 + t * 6.0));
    (1.0 - t) * v0 + t * v1
}
