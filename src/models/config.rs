use clap::ValueEnum;
use region_growth::{FrontierPolicy, Preference};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Run configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RunConfig {
    /// RNG seed; 0 draws a fresh seed from entropy for every run
    #[serde(default)]
    pub seed: u64,

    /// Directory for rendered PNGs and reports
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Nearest-color search used by closest growth
    #[serde(default)]
    pub search: SearchMode,

    /// How the next Frontier location is picked
    #[serde(default)]
    pub frontier: FrontierConfig,

    /// Intermediate frame capture
    #[serde(default)]
    pub frames: FramesConfig,

    /// Re-compress PNGs with oxipng
    #[serde(default = "default_true")]
    pub optimize_png: bool,

    /// Print per-iteration progress lines for closest growth
    #[serde(default = "default_true")]
    pub progress: bool,

    /// Write a JSON report next to each image
    #[serde(default)]
    pub report: bool,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMode {
    /// Scan every remaining color
    Linear,
    /// k-d tree with deletion
    #[default]
    KdTree,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FrontierMode {
    /// Uniform over the Frontier
    #[default]
    Random,
    /// Best of several samples by preference
    Preferred,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PreferenceMode {
    /// Grow toward a moving goal location
    #[default]
    Goal,
    /// Follow a Perlin noise field
    Perlin,
}

/// Configuration for Frontier location picking
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FrontierConfig {
    #[serde(default)]
    pub mode: FrontierMode,

    /// Candidates drawn per pick in preferred mode
    #[serde(default = "default_samples")]
    pub samples: usize,

    #[serde(default)]
    pub preference: PreferenceMode,

    /// Pixels per noise lattice cell
    #[serde(default = "default_perlin_grid_size")]
    pub perlin_grid_size: f64,

    #[serde(default = "default_perlin_octaves")]
    pub perlin_octaves: u32,
}

fn default_samples() -> usize {
    8
}

fn default_perlin_grid_size() -> f64 {
    32.0
}

fn default_perlin_octaves() -> u32 {
    4
}

impl Default for FrontierConfig {
    fn default() -> Self {
        Self {
            mode: FrontierMode::default(),
            samples: default_samples(),
            preference: PreferenceMode::default(),
            perlin_grid_size: default_perlin_grid_size(),
            perlin_octaves: default_perlin_octaves(),
        }
    }
}

impl FrontierConfig {
    /// The engine policy this configuration describes
    pub fn policy(&self) -> FrontierPolicy {
        match self.mode {
            FrontierMode::Random => FrontierPolicy::Random,
            FrontierMode::Preferred => FrontierPolicy::Preferred {
                samples: self.samples.max(1),
                preference: match self.preference {
                    PreferenceMode::Goal => Preference::Goal,
                    PreferenceMode::Perlin => Preference::Perlin {
                        grid_size: self.perlin_grid_size,
                        octaves: self.perlin_octaves,
                    },
                },
            },
        }
    }
}

/// Configuration for intermediate frames
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FramesConfig {
    /// Write a frame every N iterations; absent disables capture
    #[serde(default)]
    pub every: Option<usize>,

    /// Frame directory (default: `<output_dir>/frames`)
    #[serde(default)]
    pub dir: Option<PathBuf>,

    /// Times the final frame is repeated after a run
    #[serde(default = "default_hold")]
    pub hold: usize,
}

fn default_hold() -> usize {
    24
}

impl Default for FramesConfig {
    fn default() -> Self {
        Self {
            every: None,
            dir: None,
            hold: default_hold(),
        }
    }
}

impl RunConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Load configuration from a file, falling back to defaults
    ///
    /// A missing path means defaults. Read and parse failures are logged and
    /// also fall back to defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        seed = config.seed,
                        search = ?config.search,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Directory intermediate frames are written to
    pub fn frames_dir(&self) -> PathBuf {
        self.frames
            .dir
            .clone()
            .unwrap_or_else(|| self.output_dir.join("frames"))
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            output_dir: default_output_dir(),
            search: SearchMode::default(),
            frontier: FrontierConfig::default(),
            frames: FramesConfig::default(),
            optimize_png: true,
            progress: true,
            report: false,
        }
    }
}
