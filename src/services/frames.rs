use crate::error::RenderError;
use crate::rendering::write_png;
use region_growth::{Canvas, GrowthObserver, Placement};
use std::path::{Path, PathBuf};

/// Captures intermediate canvases as numbered PNG frames
///
/// A frame is written after every `every` placements. When the run finishes
/// the final canvas is written `hold` more times, so a video assembled from
/// the frames lingers on the finished image.
pub struct FrameRecorder {
    dir: PathBuf,
    name: String,
    every: usize,
    hold: usize,
    optimize: bool,
    written: usize,
    error: Option<RenderError>,
}

impl FrameRecorder {
    pub fn new(dir: impl Into<PathBuf>, name: impl Into<String>, every: usize) -> Self {
        Self {
            dir: dir.into(),
            name: name.into(),
            every: every.max(1),
            hold: 0,
            optimize: false,
            written: 0,
            error: None,
        }
    }

    pub fn with_hold(mut self, hold: usize) -> Self {
        self.hold = hold;
        self
    }

    pub fn with_optimize(mut self, optimize: bool) -> Self {
        self.optimize = optimize;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of frame number `index`
    pub fn frame_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{}_{}.png", self.name, index))
    }

    /// Report the number of frames written, or the first write error
    pub fn finish(self) -> Result<usize, RenderError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.written),
        }
    }

    fn write_frame(&mut self, canvas: &Canvas) {
        if self.error.is_some() {
            return;
        }
        let path = self.frame_path(self.written);
        match write_png(&path, canvas, self.optimize) {
            Ok(()) => self.written += 1,
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to write frame, stopping capture");
                self.error = Some(e);
            }
        }
    }
}

impl GrowthObserver for FrameRecorder {
    fn after_step(&mut self, placement: &Placement, canvas: &Canvas) {
        if (placement.iteration + 1) % self.every == 0 {
            self.write_frame(canvas);
        }
    }

    fn finished(&mut self, canvas: &Canvas) {
        for _ in 0..self.hold {
            self.write_frame(canvas);
        }
    }
}
