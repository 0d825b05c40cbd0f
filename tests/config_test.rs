//! Configuration file loading.

use growth_image::models::{RunConfig, SearchMode};
use pretty_assertions::assert_eq;
use region_growth::{FrontierPolicy, Preference};
use std::io::Write;
use std::path::PathBuf;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "seed: 99\noutput_dir: renders\nsearch: kd-tree\nfrontier:\n  mode: preferred\n  preference: goal\n  samples: 3"
    )
    .unwrap();

    let config = RunConfig::load(Some(file.path()));
    assert_eq!(config.seed, 99);
    assert_eq!(config.output_dir, PathBuf::from("renders"));
    assert_eq!(config.search, SearchMode::KdTree);
    assert_eq!(
        config.frontier.policy(),
        FrontierPolicy::Preferred {
            samples: 3,
            preference: Preference::Goal
        }
    );
}

#[test]
fn test_invalid_yaml_falls_back_to_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed: [not, a, number]").unwrap();
    assert_eq!(RunConfig::load(Some(file.path())), RunConfig::default());
}

#[test]
fn test_no_path_gives_defaults() {
    assert_eq!(RunConfig::load(None), RunConfig::default());
}
