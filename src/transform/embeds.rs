//! Embed comment conversion
//!
//! Bear marks an inline preview by appending an HTML comment such as
//! `<!-- {"preview":"true"} -->` to an ordinary markdown link. Obsidian uses a
//! leading `!` instead.

use regex::Regex;
use std::sync::LazyLock;

/// Everything after the `](` of a local preview link, anchored at the target.
static PREVIEW_TAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(.+\))<!-- \{.*"preview":"true".*\} -->"#).expect("valid preview tail regex")
});

static EMBED_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^(\[.+\]\(.+\))<!-- \{.*"(?:preview|embed)":"true".*\} -->"#)
        .expect("valid embed comment regex")
});

/// Convert embed comments, first turning local previews into `![]()` embeds
/// and then dropping any leftover preview/embed comments.
#[must_use]
pub fn convert_embeds(note_contents: &str) -> String {
    let embedded = embed_local_previews(note_contents);
    EMBED_COMMENT.replace_all(&embedded, "${1}").into_owned()
}

/// Prefix local (non-http) links carrying a preview comment with `!` and
/// drop the comment.
#[must_use]
pub fn embed_local_previews(note_contents: &str) -> String {
    let mut out = String::with_capacity(note_contents.len() + 8);
    for line in note_contents.split_inclusive('\n') {
        let (body, newline) = match line.strip_suffix('\n') {
            Some(body) => (body, "\n"),
            None => (line, ""),
        };
        match embed_line(body) {
            Some(rewritten) => out.push_str(&rewritten),
            None => out.push_str(body),
        }
        out.push_str(newline);
    }
    out
}

/// Rewrite a single line, or `None` when it carries no local preview link.
///
/// The label may itself contain `](`, so every split point is tried from the
/// rightmost to the leftmost and the first one whose target is local and
/// whose tail matches wins.
fn embed_line(line: &str) -> Option<String> {
    if !line.starts_with('[') {
        return None;
    }

    let mut candidates: Vec<usize> = line.match_indices("](").map(|(idx, _)| idx).collect();
    candidates.retain(|&idx| idx >= 2);

    candidates.into_iter().rev().find_map(|idx| {
        let target_start = idx + 2;
        let tail = &line[target_start..];
        if tail.starts_with("http://") || tail.starts_with("https://") {
            return None;
        }
        let caps = PREVIEW_TAIL.captures(tail)?;
        let link_end = target_start + caps.get(1)?.end();
        let match_end = target_start + caps.get(0)?.end();
        Some(format!("!{}{}", &line[..link_end], &line[match_end..]))
    })
}
