//! Tag-driven relocation of notes and attachment folders
//!
//! A note with exactly one tag is moved into a folder tree named after that
//! tag (`#work/urgent` becomes `Work/Urgent/`). Notes with no tags or with
//! several tags stay where they are. Per-note attachment folders are merged
//! into one canonical attachments folder at the same level.

mod tags;

pub use tags::{beautify_tag, extract_tags};

use crate::{ConvertError, fsops};
use std::fmt;
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, ConvertError>;

/// Reason a note is left in place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoTags,
    MultipleTags,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTags => write!(f, "no tags found"),
            Self::MultipleTags => write!(f, "multiple tags found"),
        }
    }
}

/// Where a note should go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relocation {
    /// Leave the note where it is
    NoMove(SkipReason),
    /// Move the note to this path (original filename kept)
    MoveTo(PathBuf),
}

/// Decide where a note belongs based on the tags in its contents.
///
/// The destination is relative to the note's own directory: the single tag
/// is humanized with [`beautify_tag`] and each `/`-separated segment becomes
/// one folder level.
#[must_use]
pub fn plan_relocation(note: &Path, note_contents: &str) -> Relocation {
    let tags = extract_tags(note_contents);

    let tag = match tags.as_slice() {
        [] => return Relocation::NoMove(SkipReason::NoTags),
        [tag] => tag,
        _ => return Relocation::NoMove(SkipReason::MultipleTags),
    };

    let mut destination = note.parent().map(Path::to_path_buf).unwrap_or_default();
    for segment in beautify_tag(tag).split('/') {
        destination.push(segment);
    }
    if let Some(file_name) = note.file_name() {
        destination.push(file_name);
    }

    Relocation::MoveTo(destination)
}

/// Plan and perform the relocation of a note.
///
/// # Errors
/// Returns `ConvertError::Move` if the note cannot be renamed into place.
pub fn relocate_note(note: &Path, note_contents: &str) -> Result<Relocation> {
    let relocation = plan_relocation(note, note_contents);
    if let Relocation::MoveTo(destination) = &relocation {
        fsops::rename_with_parents(note, destination)
            .map_err(|e| ConvertError::moving(note, destination, e))?;
    }
    Ok(relocation)
}

/// Where an attachments folder ends up: `<parent>/<canonical>/<name>`
#[must_use]
pub fn attachments_destination(dir: &Path, canonical: &str) -> PathBuf {
    let parent = dir.parent().map(Path::to_path_buf).unwrap_or_default();
    match dir.file_name() {
        Some(name) => parent.join(canonical).join(name),
        None => parent.join(canonical),
    }
}

/// Move a per-note attachments folder into the canonical attachments folder.
///
/// # Errors
/// Returns `ConvertError::Move` if the folder cannot be renamed into place.
pub fn move_attachments_dir(dir: &Path, canonical: &str) -> Result<PathBuf> {
    let destination = attachments_destination(dir, canonical);
    fsops::rename_with_parents(dir, &destination)
        .map_err(|e| ConvertError::moving(dir, &destination, e))?;
    Ok(destination)
}
