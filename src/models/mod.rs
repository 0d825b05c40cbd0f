pub mod canvas_spec;
pub mod config;
pub mod strategy;

pub use canvas_spec::CanvasSpec;
pub use config::{FramesConfig, FrontierConfig, FrontierMode, PreferenceMode, RunConfig, SearchMode};
pub use strategy::Strategy;
