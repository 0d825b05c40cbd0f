//! Sinks for finished canvases.

use crate::error::RenderError;
use crate::rendering::write_png;
use region_growth::Canvas;
use std::path::PathBuf;

/// Shows or stores a finished canvas
pub trait CanvasDisplay {
    /// Display `canvas` under `name`.
    ///
    /// Returns the file written, if the sink writes one. Blocks until the
    /// display action is complete.
    fn display(&mut self, name: &str, canvas: &Canvas) -> Result<Option<PathBuf>, RenderError>;
}

/// Writes `<dir>/<name>.png`
#[derive(Debug, Clone)]
pub struct PngFileDisplay {
    dir: PathBuf,
    optimize: bool,
}

impl PngFileDisplay {
    pub fn new(dir: impl Into<PathBuf>, optimize: bool) -> Self {
        Self {
            dir: dir.into(),
            optimize,
        }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.png"))
    }
}

impl CanvasDisplay for PngFileDisplay {
    fn display(&mut self, name: &str, canvas: &Canvas) -> Result<Option<PathBuf>, RenderError> {
        let path = self.path_for(name);
        write_png(&path, canvas, self.optimize)?;
        Ok(Some(path))
    }
}

/// Opens a window per canvas and waits until it is closed or Escape is pressed
#[cfg(feature = "window")]
#[derive(Debug, Clone, Default)]
pub struct WindowDisplay;

#[cfg(feature = "window")]
impl WindowDisplay {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "window")]
impl CanvasDisplay for WindowDisplay {
    fn display(&mut self, name: &str, canvas: &Canvas) -> Result<Option<PathBuf>, RenderError> {
        use minifb::{Key, Scale, Window, WindowOptions};

        let width = canvas.width() as usize;
        let height = canvas.height() as usize;
        let buffer = canvas.to_u32_buffer();

        let mut window = Window::new(
            name,
            width,
            height,
            WindowOptions {
                scale: Scale::X4,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| RenderError::Window(e.to_string()))?;
        window.limit_update_rate(Some(std::time::Duration::from_millis(16)));

        while window.is_open() && !window.is_key_down(Key::Escape) {
            window
                .update_with_buffer(&buffer, width, height)
                .map_err(|e| RenderError::Window(e.to_string()))?;
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use region_growth::{Color, GridSize, Location};

    #[test]
    fn test_png_file_display_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut display = PngFileDisplay::new(dir.path(), false);
        let mut canvas = Canvas::new(GridSize::new(1, 1).unwrap());
        canvas.set_pixel(Location::new(0, 0), Color::new(7, 7, 7)).unwrap();

        let written = display.display("growth", &canvas).unwrap();
        assert_eq!(written, Some(dir.path().join("growth.png")));
        assert!(dir.path().join("growth.png").is_file());
    }
}
