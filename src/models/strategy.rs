use serde::{Deserialize, Serialize};
use std::fmt;

/// Placement strategy of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Ascending palette in raster order
    Ordered,
    /// Region growth, colors in descending order
    Growth,
    /// Region growth, each color nearest to its placed neighbors
    ClosestGrowth,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Ordered, Strategy::Growth, Strategy::ClosestGrowth];

    /// Name used for output files
    pub fn file_stem(&self) -> &'static str {
        match self {
            Strategy::Ordered => "ordered",
            Strategy::Growth => "growth",
            Strategy::ClosestGrowth => "closest_growth",
        }
    }

    /// Human-readable heading
    pub fn title(&self) -> &'static str {
        match self {
            Strategy::Ordered => "Ordered",
            Strategy::Growth => "Growth",
            Strategy::ClosestGrowth => "Closest Growth",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}
