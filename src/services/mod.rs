pub mod display;
pub mod frames;
pub mod pipeline;
pub mod progress;
pub mod report;

#[cfg(feature = "window")]
pub use display::WindowDisplay;
pub use display::{CanvasDisplay, PngFileDisplay};
pub use frames::FrameRecorder;
pub use pipeline::GrowthPipeline;
pub use progress::ProgressPrinter;
pub use report::RunReport;
