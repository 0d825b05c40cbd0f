use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use growth_image::models::{FrontierMode, PreferenceMode, RunConfig, SearchMode, Strategy};
use growth_image::services::GrowthPipeline;

#[derive(Parser)]
#[command(name = "growth-image")]
#[command(about = "Place every color of a 15-bit palette exactly once on a 256x128 image")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    options: RunOptions,
}

#[derive(Subcommand)]
enum Commands {
    /// Ascending palette in raster order
    Ordered,
    /// Region growth from a random seed, colors in descending order
    Growth,
    /// Region growth, each color closest to the mean of its placed neighbors
    ClosestGrowth,
    /// All three strategies in order (default)
    All,
}

/// Options overriding the configuration file
#[derive(Args)]
struct RunOptions {
    /// YAML configuration file
    #[arg(long, global = true, env = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// RNG seed (0 draws a fresh seed per run)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Directory for rendered images and reports
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    /// Write an intermediate frame every N iterations
    #[arg(long, global = true)]
    frames_every: Option<usize>,

    /// Nearest-color search for closest growth
    #[arg(long, global = true, value_enum)]
    search: Option<SearchMode>,

    /// How the next Frontier location is picked
    #[arg(long, global = true, value_enum)]
    frontier: Option<FrontierMode>,

    /// Preference field for the preferred frontier mode
    #[arg(long, global = true, value_enum)]
    preference: Option<PreferenceMode>,

    /// Show each finished image in a window
    #[arg(long, global = true)]
    window: bool,

    /// Suppress per-iteration progress lines
    #[arg(long, short, global = true)]
    quiet: bool,
}

impl RunOptions {
    fn apply(&self, config: &mut RunConfig) {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(every) = self.frames_every {
            config.frames.every = Some(every);
        }
        if let Some(search) = self.search {
            config.search = search;
        }
        if let Some(mode) = self.frontier {
            config.frontier.mode = mode;
        }
        if let Some(preference) = self.preference {
            config.frontier.preference = preference;
        }
        if self.quiet {
            config.progress = false;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "growth_image=info,region_growth=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    let mut config = RunConfig::load(cli.options.config.as_deref());
    cli.options.apply(&mut config);

    let mut pipeline = build_pipeline(config, cli.options.window)?;

    match cli.command {
        Some(Commands::Ordered) => {
            pipeline.ordered()?;
        }
        Some(Commands::Growth) => {
            pipeline.growth()?;
        }
        Some(Commands::ClosestGrowth) => {
            pipeline.closest_growth()?;
        }
        Some(Commands::All) | None => {
            for strategy in Strategy::ALL {
                println!("{}", strategy.title());
                let report = pipeline.run(strategy)?;
                if let Some(output) = &report.output {
                    println!("Rendered {} ({} ms)", output.display(), report.elapsed_ms);
                }
            }
        }
    }

    Ok(())
}

#[cfg(feature = "window")]
fn build_pipeline(config: RunConfig, window: bool) -> anyhow::Result<GrowthPipeline> {
    use growth_image::services::WindowDisplay;

    let pipeline = GrowthPipeline::new(config);
    if window {
        return Ok(pipeline.with_display(Box::new(WindowDisplay::new())));
    }
    Ok(pipeline)
}

#[cfg(not(feature = "window"))]
fn build_pipeline(config: RunConfig, window: bool) -> anyhow::Result<GrowthPipeline> {
    if window {
        anyhow::bail!("--window requires building with the `window` feature");
    }
    Ok(GrowthPipeline::new(config))
}
