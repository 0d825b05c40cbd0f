//! Test fixtures and constants.

use growth_image::error::RenderError;
use growth_image::models::{CanvasSpec, RunConfig};
use growth_image::services::{CanvasDisplay, GrowthPipeline};
use region_growth::{Canvas, QuantizationScheme};
use std::cell::RefCell;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Canvas specs small enough for debug-mode runs
pub mod specs {
    use super::*;

    /// 32x16 grid, 3 bits per channel (512 colors)
    pub const SMALL: CanvasSpec = CanvasSpec {
        width: 32,
        height: 16,
        scheme: QuantizationScheme::new(3, 3, 3),
    };

    /// 8x8 grid, 2 bits per channel (64 colors)
    pub const TINY: CanvasSpec = CanvasSpec {
        width: 8,
        height: 8,
        scheme: QuantizationScheme::new(2, 2, 2),
    };

    /// Grid one cell larger than its palette
    pub const MISMATCHED: CanvasSpec = CanvasSpec {
        width: 9,
        height: 1,
        scheme: QuantizationScheme::new(1, 1, 1),
    };
}

/// Config writing into `dir` with a fixed seed and fast PNG encoding
pub fn test_config(dir: &Path) -> RunConfig {
    RunConfig {
        seed: 1234,
        output_dir: dir.to_path_buf(),
        optimize_png: false,
        ..Default::default()
    }
}

/// Display keeping canvases in memory
#[derive(Clone, Default)]
pub struct MemoryDisplay {
    pub shown: Rc<RefCell<Vec<(String, Canvas)>>>,
}

impl CanvasDisplay for MemoryDisplay {
    fn display(&mut self, name: &str, canvas: &Canvas) -> Result<Option<PathBuf>, RenderError> {
        self.shown
            .borrow_mut()
            .push((name.to_string(), canvas.clone()));
        Ok(None)
    }
}

/// Write sink whose contents stay readable after it is boxed away
#[derive(Clone, Default)]
pub struct SharedBuffer(pub Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Pipeline over `spec` with in-memory display and captured diagnostics
pub fn memory_pipeline(
    config: RunConfig,
    spec: CanvasSpec,
) -> (GrowthPipeline, MemoryDisplay, SharedBuffer) {
    let display = MemoryDisplay::default();
    let diagnostics = SharedBuffer::default();
    let pipeline = GrowthPipeline::new(config)
        .with_spec(spec)
        .with_display(Box::new(display.clone()))
        .with_diagnostics(Box::new(diagnostics.clone()));
    (pipeline, display, diagnostics)
}
