//! Convert command - rewrite and reorganize a Bear export in place

use crate::config::ConverterConfig;
use crate::relocate::{self, Relocation};
use crate::{ConvertError, fsops, output, transform};
use colored::Colorize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, ConvertError>;

/// Counts gathered while converting an export
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Markdown notes found at the top level
    pub notes: usize,
    /// Notes moved into a tag folder
    pub moved: usize,
    /// Notes left in place because of zero or several tags
    pub skipped: usize,
    /// Attachment folders merged into the canonical attachments folder
    pub attachments: usize,
}

impl ConvertSummary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Print the note count, followed by a breakdown unless `quiet`
    pub fn print(&self, quiet: bool) {
        println!("{}", output::processed_count(self.notes));
        if quiet {
            return;
        }
        println!("  {} {}", "✓ Moved:".green(), self.moved);
        if self.skipped > 0 {
            println!("  {} {}", "⊘ Left in place:".yellow(), self.skipped);
        }
        if self.attachments > 0 {
            println!("  {} {}", "✓ Attachment folders merged:".green(), self.attachments);
        }
    }
}

/// Execute the convert command over the immediate children of `dir`
///
/// Notes are rewritten and then relocated by tag; other subdirectories are
/// merged into the attachments folder. The listing is taken before anything
/// moves, so folders created along the way are never visited. Folders are
/// handled before notes: a note tagged with its own name lands in a folder
/// named like its attachments folder, which must already be out of the way.
///
/// # Errors
/// Returns `ConvertError::InvalidInput` if `dir` is not a directory, and
/// propagates the first filesystem failure; entries handled before it stay
/// converted.
pub fn execute(dir: &Path, config: &ConverterConfig, dry_run: bool) -> Result<ConvertSummary> {
    if !dir.is_dir() {
        return Err(ConvertError::InvalidInput(format!(
            "'{}' is not a directory",
            dir.display()
        )));
    }

    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<Vec<PathBuf>>>()?;
    entries.sort_by_key(|path| !path.is_dir());

    if dry_run && !config.quiet {
        println!("{}", "=== Dry Run Mode ===".yellow().bold());
    }

    let mut summary = ConvertSummary::new();

    for path in entries {
        if !config.quiet {
            println!("{}", output::processing(&path, config.path_format));
        }

        if path.is_file() && config.is_note(&path) {
            convert_note(&path, config, dry_run, &mut summary)?;
            summary.notes += 1;
        } else if path.is_dir() && is_attachments_candidate(&path, config) {
            merge_attachments(&path, config, dry_run)?;
            summary.attachments += 1;
        }
    }

    if dry_run && !config.quiet {
        println!("\n{}", "Run without --dry-run to apply changes.".yellow());
    }

    Ok(summary)
}

/// A subdirectory is merged unless it is hidden or already the attachments
/// folder
fn is_attachments_candidate(path: &Path, config: &ConverterConfig) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy();
    name != config.attachments_dir.as_str() && !config.is_hidden(&name)
}

fn convert_note(
    path: &Path,
    config: &ConverterConfig,
    dry_run: bool,
    summary: &mut ConvertSummary,
) -> Result<()> {
    let relocation = if dry_run {
        let contents = transform::transform(&fs::read_to_string(path)?);
        relocate::plan_relocation(path, &contents)
    } else {
        let contents = fsops::rewrite_preserving_times(path, transform::transform)?;
        relocate::relocate_note(path, &contents)?
    };

    match relocation {
        Relocation::NoMove(reason) => {
            summary.skipped += 1;
            if !config.quiet {
                println!("{}", output::skipped(path, reason, config.path_format));
            }
        }
        Relocation::MoveTo(destination) => {
            summary.moved += 1;
            if !config.quiet {
                println!("{}", report_move(path, &destination, config, dry_run));
            }
        }
    }
    Ok(())
}

fn merge_attachments(path: &Path, config: &ConverterConfig, dry_run: bool) -> Result<()> {
    let destination = if dry_run {
        relocate::attachments_destination(path, &config.attachments_dir)
    } else {
        relocate::move_attachments_dir(path, &config.attachments_dir)?
    };

    if !config.quiet {
        println!("{}", report_move(path, &destination, config, dry_run));
    }
    Ok(())
}

fn report_move(from: &Path, to: &Path, config: &ConverterConfig, dry_run: bool) -> String {
    if dry_run {
        output::would_move(from, to, config.path_format)
    } else {
        output::moved(from, to, config.path_format)
    }
}
