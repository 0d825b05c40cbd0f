use crate::error::RunError;
use crate::models::Strategy;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Summary of one completed run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub strategy: Strategy,
    /// Effective seed; absent for the deterministic raster strategy
    pub seed: Option<u64>,
    pub width: u32,
    pub height: u32,
    /// Placements performed
    pub iterations: usize,
    pub elapsed_ms: u64,
    /// Image written by the display, if any
    pub output: Option<PathBuf>,
    /// Intermediate frames written
    pub frames: usize,
    pub finished_at: DateTime<Utc>,
}

impl RunReport {
    pub fn to_json(&self) -> Result<String, RunError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report as pretty-printed JSON
    pub fn write_json(&self, path: &Path) -> Result<(), RunError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        tracing::debug!(path = %path.display(), "Wrote run report");
        Ok(())
    }
}
