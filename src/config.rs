//! Command line configuration.

use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_ROOT_DIR: &str = "results/";

#[derive(Parser, Debug, Clone)]
#[command(name = "cit-check")]
#[command(version)]
#[command(
    about = "Report runs where the incremental interaction finder disagrees with the faulty baseline",
    long_about = None
)]
pub struct Config {
    /// Results root containing `.current` and the run directories
    #[arg(value_name = "ROOT_DIR", default_value = DEFAULT_ROOT_DIR)]
    pub root_dir: PathBuf,
}

impl Config {
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_results_dir() {
        let config = Config::parse_from(["cit-check"]);
        assert_eq!(config.root_dir, PathBuf::from("results/"));
    }

    #[test]
    fn takes_root_dir_positionally() {
        let config = Config::parse_from(["cit-check", "/tmp/out"]);
        assert_eq!(config.root_dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn rejects_extra_arguments() {
        assert!(Config::try_parse_from(["cit-check", "a", "b"]).is_err());
    }
}
