//! bear2obsidian - Convert a Bear markdown export into an Obsidian vault
//!
//! This library rewrites Bear-flavoured markdown into Obsidian-flavoured
//! markdown and reorganizes the exported notes on disk, moving each note into
//! a folder named after its tag and merging per-note attachment folders into
//! a single attachments folder.

use std::path::PathBuf;
use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod fsops;
pub mod output;
pub mod relocate;
pub mod transform;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// A note or attachments folder could not be moved
    #[error("Failed to move '{}' to '{}': {source}", .from.display(), .to.display())]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ConvertError {
    /// Wrap an I/O failure from a rename with the paths involved
    #[must_use]
    pub fn moving(from: impl Into<PathBuf>, to: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Move {
            from: from.into(),
            to: to.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
