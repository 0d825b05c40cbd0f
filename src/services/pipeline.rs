//! The three placement entry points.
//!
//! Each entry point builds a fresh palette, fills a canvas with one strategy,
//! hands the finished canvas to the display and returns a [`RunReport`].
//! Nothing is displayed when a run fails.

use crate::error::RunError;
use crate::models::{CanvasSpec, RunConfig, SearchMode, Strategy};
use crate::services::display::{CanvasDisplay, PngFileDisplay};
use crate::services::frames::FrameRecorder;
use crate::services::progress::ProgressPrinter;
use crate::services::report::RunReport;
use rand::Rng;
use region_growth::{
    place_raster, Canvas, ClosestSelector, ColorSelector, DescendingSelector, GridSize,
    GrowthEngine, Palette,
};
use std::io::Write;
use std::time::Instant;

pub struct GrowthPipeline {
    config: RunConfig,
    spec: CanvasSpec,
    display: Box<dyn CanvasDisplay>,
    diagnostics: Box<dyn Write>,
}

/// Canvas plus run bookkeeping, before display
struct Placed {
    canvas: Canvas,
    seed: Option<u64>,
    iterations: usize,
    frames: usize,
}

impl GrowthPipeline {
    /// Pipeline writing PNGs to the configured output directory and progress
    /// lines to stderr
    pub fn new(config: RunConfig) -> Self {
        let display = PngFileDisplay::new(config.output_dir.clone(), config.optimize_png);
        Self {
            config,
            spec: CanvasSpec::DEFAULT,
            display: Box::new(display),
            diagnostics: Box::new(std::io::stderr()),
        }
    }

    pub fn with_spec(mut self, spec: CanvasSpec) -> Self {
        self.spec = spec;
        self
    }

    pub fn with_display(mut self, display: Box<dyn CanvasDisplay>) -> Self {
        self.display = display;
        self
    }

    /// Stream receiving closest-growth progress lines
    pub fn with_diagnostics(mut self, diagnostics: Box<dyn Write>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Ascending palette in raster order
    pub fn ordered(&mut self) -> Result<RunReport, RunError> {
        self.run(Strategy::Ordered)
    }

    /// Random region growth with descending colors
    pub fn growth(&mut self) -> Result<RunReport, RunError> {
        self.run(Strategy::Growth)
    }

    /// Random region growth with nearest-neighbor-mean colors
    pub fn closest_growth(&mut self) -> Result<RunReport, RunError> {
        self.run(Strategy::ClosestGrowth)
    }

    pub fn run(&mut self, strategy: Strategy) -> Result<RunReport, RunError> {
        let size = self.spec.validate()?;
        let palette = self.spec.scheme.generate()?;
        tracing::info!(%strategy, %size, colors = palette.len(), "Starting run");

        let started = Instant::now();
        let placed = match strategy {
            Strategy::Ordered => Placed {
                canvas: place_raster(size, &palette)?,
                seed: None,
                iterations: size.area(),
                frames: 0,
            },
            Strategy::Growth => {
                self.grow(strategy, size, DescendingSelector::new(palette), false)?
            }
            Strategy::ClosestGrowth => {
                let progress = self.config.progress;
                let selector = closest_selector(palette, self.config.search);
                self.grow(strategy, size, selector, progress)?
            }
        };
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        let output = self.display.display(strategy.file_stem(), &placed.canvas)?;
        let report = RunReport {
            strategy,
            seed: placed.seed,
            width: size.width(),
            height: size.height(),
            iterations: placed.iterations,
            elapsed_ms,
            output,
            frames: placed.frames,
            finished_at: chrono::Utc::now(),
        };

        tracing::info!(
            %strategy,
            iterations = report.iterations,
            elapsed_ms,
            output = ?report.output,
            "Finished run"
        );

        if self.config.report {
            let path = self
                .config
                .output_dir
                .join(format!("{}.json", strategy.file_stem()));
            report.write_json(&path)?;
        }
        Ok(report)
    }

    fn grow<S: ColorSelector>(
        &mut self,
        strategy: Strategy,
        size: GridSize,
        selector: S,
        progress: bool,
    ) -> Result<Placed, RunError> {
        let seed = self.resolve_seed();
        let policy = self.config.frontier.policy();
        tracing::debug!(%strategy, seed, ?policy, "Growth parameters");

        let engine = GrowthEngine::seeded(size, selector, seed)?.with_frontier_policy(policy);

        let recorder = self.config.frames.every.map(|every| {
            FrameRecorder::new(self.config.frames_dir(), strategy.file_stem(), every)
                .with_hold(self.config.frames.hold)
                .with_optimize(self.config.optimize_png)
        });
        let printer = if progress {
            Some(ProgressPrinter::new(self.diagnostics.as_mut()))
        } else {
            None
        };

        let mut observers = (printer, recorder);
        let canvas = engine.run_with(&mut observers)?;
        let (printer, recorder) = observers;

        if let Some(printer) = printer {
            printer.finish()?;
        }
        let frames = match recorder {
            Some(recorder) => recorder.finish()?,
            None => 0,
        };

        Ok(Placed {
            iterations: canvas.filled(),
            canvas,
            seed: Some(seed),
            frames,
        })
    }

    /// Configured seed, or a fresh one when it is 0
    fn resolve_seed(&self) -> u64 {
        match self.config.seed {
            0 => rand::thread_rng().gen(),
            seed => seed,
        }
    }
}

fn closest_selector(palette: Palette, search: SearchMode) -> Box<dyn ColorSelector> {
    match search {
        SearchMode::Linear => Box::new(ClosestSelector::new(palette)),
        SearchMode::KdTree => Box::new(ClosestSelector::new(palette.into_tree())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use region_growth::QuantizationScheme;

    fn small_spec() -> CanvasSpec {
        CanvasSpec {
            width: 8,
            height: 8,
            scheme: QuantizationScheme::new(2, 2, 2),
        }
    }

    fn pipeline(dir: &std::path::Path) -> GrowthPipeline {
        let config = RunConfig {
            seed: 5,
            output_dir: dir.to_path_buf(),
            optimize_png: false,
            progress: false,
            ..Default::default()
        };
        GrowthPipeline::new(config)
            .with_spec(small_spec())
            .with_diagnostics(Box::new(std::io::sink()))
    }

    #[test]
    fn test_ordered_report() {
        let dir = tempfile::tempdir().unwrap();
        let report = pipeline(dir.path()).ordered().unwrap();
        assert_eq!(report.strategy, Strategy::Ordered);
        assert_eq!(report.seed, None);
        assert_eq!(report.iterations, 64);
        assert_eq!(report.output, Some(dir.path().join("ordered.png")));
    }

    #[test]
    fn test_growth_uses_configured_seed() {
        let dir = tempfile::tempdir().unwrap();
        let report = pipeline(dir.path()).growth().unwrap();
        assert_eq!(report.seed, Some(5));
        assert_eq!(report.iterations, 64);
    }

    #[test]
    fn test_zero_seed_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = pipeline(dir.path());
        p.config.seed = 0;
        // Two draws from entropy coincide with negligible probability.
        assert_ne!(p.resolve_seed(), p.resolve_seed());
    }

    #[test]
    fn test_report_file_written() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = pipeline(dir.path());
        p.config.report = true;
        p.closest_growth().unwrap();
        assert!(dir.path().join("closest_growth.json").is_file());
        assert!(dir.path().join("closest_growth.png").is_file());
        assert!(!dir.path().join("growth.json").exists());
    }
}
