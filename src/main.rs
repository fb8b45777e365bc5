//! bear2obsidian CLI application entry point
//!
//! Converts a directory of notes exported from Bear into the layout and
//! markdown dialect Obsidian expects. The conversion happens in place, so run
//! it on a copy of the export.
//!
//! # Usage
//!
//! ```bash
//! # Convert an export
//! bear2obsidian ~/Desktop/bear-export
//!
//! # Preview what would change
//! bear2obsidian --dry-run ~/Desktop/bear-export
//!
//! # Merge attachments into a differently named folder
//! bear2obsidian --attachments-dir assets ~/Desktop/bear-export
//! ```
//!
//! # Configuration
//!
//! Defaults can be set in `~/.config/bear2obsidian/config.toml` on Linux, or
//! in any file passed with `--config`.

use bear2obsidian::{
    ConvertError,
    cli::{Cli, USAGE},
    commands,
    config::ConverterConfig,
};

type Result<T> = std::result::Result<T, ConvertError>;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let Some(directory) = cli.directory.as_deref() else {
        println!("{USAGE}");
        std::process::exit(1);
    };

    let mut config = ConverterConfig::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    let summary = commands::convert(directory, &config, cli.dry_run)?;
    summary.print(config.quiet);

    Ok(())
}
