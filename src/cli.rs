//! Command-line interface definitions and parsing
//!
//! The converter takes a single positional argument, the Bear export
//! directory, plus a few flags that override values from the config file.
//!
//! # Examples
//!
//! ```no_run
//! use bear2obsidian::cli::Cli;
//!
//! let cli = Cli::parse_args();
//! if let Some(dir) = &cli.directory {
//!     println!("Converting {}", dir.display());
//! }
//! ```

use crate::config::{ConverterConfig, PathFormat};
use clap::Parser;
use std::path::PathBuf;

/// Printed when the export directory is missing
pub const USAGE: &str = "Usage: bear2obsidian /path/to/exported-bear-notes/";

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "bear2obsidian")]
#[command(about = "Convert a Bear markdown export into an Obsidian vault", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory containing the exported Bear notes
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// Suppress informational output
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Show what would change without touching any file
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,

    /// Name of the folder attachments are merged into (overrides config)
    #[arg(long = "attachments-dir", value_name = "NAME")]
    pub attachments_dir: Option<String>,

    /// Read configuration from this file instead of the default location
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Display absolute paths (overrides config)
    #[arg(long = "absolute", conflicts_with = "relative")]
    pub absolute: bool,

    /// Display relative paths (overrides config)
    #[arg(long = "relative", conflicts_with = "absolute")]
    pub relative: bool,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut ConverterConfig) {
        if self.quiet {
            config.quiet = true;
        }
        if let Some(name) = &self.attachments_dir {
            config.attachments_dir.clone_from(name);
        }
        if self.absolute {
            config.path_format = PathFormat::Absolute;
        } else if self.relative {
            config.path_format = PathFormat::Relative;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_is_optional() {
        let cli = Cli::try_parse_from(["bear2obsidian"]).unwrap();
        assert!(cli.directory.is_none());
    }

    #[test]
    fn test_parse_directory_and_flags() {
        let cli = Cli::try_parse_from(["bear2obsidian", "-q", "--dry-run", "export"]).unwrap();
        assert_eq!(cli.directory, Some(PathBuf::from("export")));
        assert!(cli.quiet);
        assert!(cli.dry_run);
    }

    #[test]
    fn test_absolute_conflicts_with_relative() {
        let result = Cli::try_parse_from(["bear2obsidian", "--absolute", "--relative", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides_applied() {
        let cli = Cli::try_parse_from([
            "bear2obsidian",
            "--attachments-dir",
            "assets",
            "--relative",
            "-q",
            "export",
        ])
        .unwrap();
        let mut config = ConverterConfig::default();

        cli.apply_overrides(&mut config);

        assert_eq!(config.attachments_dir, "assets");
        assert_eq!(config.path_format, PathFormat::Relative);
        assert!(config.quiet);
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let cli = Cli::try_parse_from(["bear2obsidian", "export"]).unwrap();
        let mut config = ConverterConfig {
            quiet: true,
            ..ConverterConfig::default()
        };

        cli.apply_overrides(&mut config);

        assert!(config.quiet);
        assert_eq!(config.attachments_dir, "_attachments");
    }
}
