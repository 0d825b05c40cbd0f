use region_growth::{GrowthError, PaletteError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Window error: {0}")]
    Window(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("Palette error: {0}")]
    Palette(#[from] PaletteError),

    #[error("Placement error: {0}")]
    Growth(#[from] GrowthError),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("Report error: {0}")]
    Report(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_png_encode() {
        let error = RenderError::PngEncode("Encoding failed".to_string());
        assert_eq!(error.to_string(), "PNG encode error: Encoding failed");
    }

    #[test]
    fn test_render_error_window() {
        let error = RenderError::Window("no display".to_string());
        assert_eq!(error.to_string(), "Window error: no display");
    }

    #[test]
    fn test_run_error_from_growth_error() {
        let run_error: RunError = GrowthError::PaletteSizeMismatch {
            palette: 8,
            area: 9,
        }
        .into();
        match &run_error {
            RunError::Growth(GrowthError::PaletteSizeMismatch { palette, area }) => {
                assert_eq!((*palette, *area), (8, 9));
            }
            _ => panic!("Expected Growth variant"),
        }
        assert!(run_error.to_string().starts_with("Placement error: palette has 8 colors"));
    }

    #[test]
    fn test_run_error_from_render_error() {
        let run_error: RunError = RenderError::PngEncode("bad".to_string()).into();
        assert!(matches!(run_error, RunError::Render(_)));
    }

    #[test]
    fn test_run_error_from_palette_error() {
        let run_error: RunError = PaletteError::Empty.into();
        assert!(matches!(run_error, RunError::Palette(PaletteError::Empty)));
    }
}
