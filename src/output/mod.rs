//! Output formatting for CLI display
//!
//! This module provides utilities for formatting the converter's progress
//! output, including path display formatting and the final summary.

use crate::config::PathFormat;
use crate::relocate::SkipReason;
use colored::Colorize;
use std::path::Path;

/// Format a path according to the display mode
#[must_use]
pub fn format_path(path: &Path, format: PathFormat) -> String {
    match format {
        PathFormat::Absolute => path.display().to_string(),
        PathFormat::Relative => {
            if let Ok(cwd) = std::env::current_dir()
                && let Ok(rel_path) = path.strip_prefix(&cwd)
            {
                return rel_path.display().to_string();
            }
            // Fallback to absolute if relative path cannot be computed
            path.display().to_string()
        }
    }
}

/// Line announcing the entry about to be processed
#[must_use]
pub fn processing(path: &Path, format: PathFormat) -> String {
    format!("Processing {}", format_path(path, format))
}

/// Line explaining why a note stays where it is
#[must_use]
pub fn skipped(path: &Path, reason: SkipReason, format: PathFormat) -> String {
    let message = match reason {
        SkipReason::NoTags => "Found no tags for",
        SkipReason::MultipleTags => "Found multiple tags for",
    };
    format!("{} {}, won't move it", message.yellow(), format_path(path, format))
}

/// Line reporting a move from `from` to `to`
#[must_use]
pub fn moved(from: &Path, to: &Path, format: PathFormat) -> String {
    format!(
        "  {} {} -> {}",
        "Moved".green(),
        format_path(from, format),
        format_path(to, format)
    )
}

/// Line reporting a move that a dry run would perform
#[must_use]
pub fn would_move(from: &Path, to: &Path, format: PathFormat) -> String {
    format!(
        "  {} {} -> {}",
        "Would move".cyan(),
        format_path(from, format),
        format_path(to, format)
    )
}

/// Final note count line
#[must_use]
pub fn processed_count(count: usize) -> String {
    format!("Processed {count} notes")
}
