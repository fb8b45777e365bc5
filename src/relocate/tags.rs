use regex::Regex;
use std::sync::LazyLock;

/// A `#tag` at the start of the text or after whitespace, with at most one
/// nested level (`#parent/child`). Multi-word tags are not recognized.
static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\s)#([\w,.-]+(?:/[\w,.-]+)?)").expect("valid tag regex")
});

/// Extract every tag from a note, without the leading `#`.
///
/// Tags are returned in order of appearance and duplicates are kept.
///
/// # Examples
/// ```
/// use bear2obsidian::relocate::extract_tags;
///
/// assert_eq!(extract_tags("#work/urgent and #home"), vec!["work/urgent", "home"]);
/// ```
#[must_use]
pub fn extract_tags(note_contents: &str) -> Vec<String> {
    TAG.captures_iter(note_contents)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Humanize each segment of a (possibly nested) tag for use as a folder name.
///
/// Hyphens become spaces and each segment is capitalized: its first
/// character title-cased and the rest lower-cased.
///
/// # Examples
/// ```
/// use bear2obsidian::relocate::beautify_tag;
///
/// assert_eq!(beautify_tag("foo-bar/baz-qux"), "Foo bar/Baz qux");
/// ```
#[must_use]
pub fn beautify_tag(tag: &str) -> String {
    tag.split('/')
        .map(|segment| capitalize(&segment.replace('-', " ")))
        .collect::<Vec<_>>()
        .join("/")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut capitalized = titlecase(first);
    capitalized.extend(chars.flat_map(char::to_lowercase));
    capitalized
}

/// Title case of a single character. Differs from upper case only for
/// digraphs and ligatures, where just the first letter is raised.
fn titlecase(c: char) -> String {
    let mapped = match c {
        'ß' => "Ss",
        'Ǆ' | 'ǅ' | 'ǆ' => "ǅ",
        'Ǉ' | 'ǈ' | 'ǉ' => "ǈ",
        'Ǌ' | 'ǋ' | 'ǌ' => "ǋ",
        'Ǳ' | 'ǲ' | 'ǳ' => "ǲ",
        'ŉ' => "ʼN",
        'ﬀ' => "Ff",
        'ﬁ' => "Fi",
        'ﬂ' => "Fl",
        'ﬃ' => "Ffi",
        'ﬄ' => "Ffl",
        'ﬅ' | 'ﬆ' => "St",
        'և' => "Եւ",
        _ => return c.to_uppercase().collect(),
    };
    mapped.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_nested_and_flat_tags() {
        let tags = extract_tags("Todo #work/urgent\nalso #home");
        assert_eq!(tags, vec!["work/urgent".to_string(), "home".to_string()]);
    }

    #[test]
    fn test_extract_tag_at_start_of_text() {
        assert_eq!(extract_tags("#project-x\nBody"), vec!["project-x".to_string()]);
    }

    #[test]
    fn test_duplicates_preserved() {
        assert_eq!(extract_tags("#a text #a"), vec!["a".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_nesting_limited_to_one_level() {
        assert_eq!(extract_tags("#a/b/c"), vec!["a/b".to_string()]);
    }

    #[test]
    fn test_punctuation_inside_tags() {
        assert_eq!(extract_tags(" #v1.2,beta"), vec!["v1.2,beta".to_string()]);
    }

    #[test]
    fn test_headings_are_not_tags() {
        assert!(extract_tags("# Title\n## Section\n").is_empty());
    }

    #[test]
    fn test_hash_inside_word_is_not_tag() {
        assert!(extract_tags("issue#42 and [[Note#Heading]]").is_empty());
    }

    #[test]
    fn test_adjacent_tags_need_whitespace() {
        assert_eq!(extract_tags("#one#two #three"), vec!["one".to_string(), "three".to_string()]);
    }

    #[test]
    fn test_unicode_word_characters() {
        assert_eq!(extract_tags("#café"), vec!["café".to_string()]);
    }

    #[test]
    fn test_beautify_nested() {
        assert_eq!(beautify_tag("foo-bar/baz-qux"), "Foo bar/Baz qux");
    }

    #[test]
    fn test_beautify_single_segment() {
        assert_eq!(beautify_tag("project-x"), "Project x");
    }

    #[test]
    fn test_beautify_lowercases_rest() {
        assert_eq!(beautify_tag("MyProject"), "Myproject");
    }

    #[test]
    fn test_beautify_titlecases_first_letter() {
        assert_eq!(beautify_tag("ßtraße"), "Sstraße");
        assert_eq!(beautify_tag("ǆungla"), "ǅungla");
        assert_eq!(beautify_tag("ﬁle-notes"), "File notes");
        assert_eq!(beautify_tag("éte/über"), "Éte/Über");
    }

    #[test]
    fn test_beautify_leading_digit() {
        assert_eq!(beautify_tag("2024-goals"), "2024 goals");
    }
}
