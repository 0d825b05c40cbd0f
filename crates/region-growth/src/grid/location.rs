//! Grid coordinates and dimensions.

use std::fmt;

use crate::error::GrowthError;

/// Offsets of the 8-neighborhood (Chebyshev distance 1), in `dx`-major order.
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A pixel coordinate. `x` grows to the right, `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    pub x: u32,
    pub y: u32,
}

impl Location {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Offset by `(dx, dy)`, or `None` if the result leaves the grid.
    #[inline]
    pub fn offset(self, dx: i64, dy: i64, size: GridSize) -> Option<Self> {
        let x = i64::from(self.x) + dx;
        let y = i64::from(self.y) + dy;
        if x < 0 || y < 0 || x >= i64::from(size.width) || y >= i64::from(size.height) {
            return None;
        }
        Some(Self::new(x as u32, y as u32))
    }

    /// The in-bounds 8-neighbors of this location.
    ///
    /// Corner cells have 3 neighbors, edge cells 5, interior cells 8.
    pub fn neighbors(self, size: GridSize) -> impl Iterator<Item = Location> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(move |&(dx, dy)| self.offset(dx, dy, size))
    }

    /// Squared Euclidean distance in pixels.
    #[inline]
    pub fn distance_squared(self, other: Location) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx * dx + dy * dy
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Width and height of a grid, both non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    width: u32,
    height: u32,
}

impl GridSize {
    /// # Errors
    ///
    /// Returns [`GrowthError::EmptyGrid`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, GrowthError> {
        if width == 0 || height == 0 {
            return Err(GrowthError::EmptyGrid { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells.
    #[inline]
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn contains(&self, location: Location) -> bool {
        location.x < self.width && location.y < self.height
    }

    /// Row-major index of `location`. The caller guarantees it is in bounds.
    #[inline]
    pub fn index_of(&self, location: Location) -> usize {
        debug_assert!(self.contains(location));
        location.y as usize * self.width as usize + location.x as usize
    }

    /// Inverse of [`index_of`](Self::index_of).
    #[inline]
    pub fn location_at(&self, index: usize) -> Location {
        debug_assert!(index < self.area());
        let width = self.width as usize;
        Location::new((index % width) as u32, (index / width) as u32)
    }

    /// All locations in raster order (row-major, `x` fastest).
    pub fn locations(&self) -> impl Iterator<Item = Location> {
        let size = *self;
        (0..size.area()).map(move |i| size.location_at(i))
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
