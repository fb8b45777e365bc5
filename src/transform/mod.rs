//! Markdown dialect conversion
//!
//! Rewrites the body of a Bear note into Obsidian-flavoured markdown. The
//! rules run in a fixed order because later rules see the output of earlier
//! ones:
//!
//! 1. [`remove_toplevel_heading`]
//! 2. [`increase_indentation`]
//! 3. [`convert_embeds`]
//! 4. [`replace_heading_links`]
//!
//! None of the rules can fail; text that does not match passes through.
//! Indentation rescaling is not idempotent, so a note must only be converted
//! once.

mod embeds;

pub use embeds::{convert_embeds, embed_local_previews};

use regex::Regex;
use std::sync::LazyLock;

static TOPLEVEL_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A# .+?\n\n?").expect("valid heading regex"));

static NESTED_LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^( {2,})(-|\*|\d+\.) ").expect("valid list indentation regex")
});

static HEADING_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[(.+)?/(.+)\]\]").expect("valid heading link regex"));

/// Convert a whole note from Bear to Obsidian markdown
///
/// # Examples
/// ```
/// use bear2obsidian::transform::transform;
///
/// let note = "# Title\n\nSee [[Projects/Setup]]\n  - nested\n";
/// assert_eq!(transform(note), "See [[Projects#Setup]]\n    - nested\n");
/// ```
#[must_use]
pub fn transform(note_contents: &str) -> String {
    let contents = remove_toplevel_heading(note_contents);
    let contents = increase_indentation(&contents);
    let contents = convert_embeds(&contents);
    replace_heading_links(&contents)
}

/// Drop the first line when it is a level-one heading, along with one blank
/// line after it. Obsidian already shows the filename as the title.
#[must_use]
pub fn remove_toplevel_heading(note_contents: &str) -> String {
    TOPLEVEL_HEADING.replace(note_contents, "").into_owned()
}

/// Double the indentation of nested list items (Bear indents by 2, Obsidian
/// renders nesting correctly with 4)
#[must_use]
pub fn increase_indentation(note_contents: &str) -> String {
    NESTED_LIST_ITEM
        .replace_all(note_contents, "${1}${1}${2} ")
        .into_owned()
}

/// Rewrite `[[Note/Heading]]` links as `[[Note#Heading]]`
#[must_use]
pub fn replace_heading_links(note_contents: &str) -> String {
    HEADING_LINK
        .replace_all(note_contents, "[[${1}#${2}]]")
        .into_owned()
}
