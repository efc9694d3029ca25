//! Embedded-link extraction for palette comments.
//!
//! Palette files often carry an author comment with a URL in it. This finds
//! the first `http`-anchored run of URL characters so the comment affordance
//! can open it. Matching is deliberately permissive: the literal `http` is
//! accepted anywhere in the text (even inside a longer word) and the link
//! ends at the first character outside the allowed set.

use regex::Regex;
use std::sync::OnceLock;

static LINK_RE: OnceLock<Regex> = OnceLock::new();

/// Characters allowed in a link after the `http` anchor: ASCII letters,
/// digits, and common URL punctuation.
fn link_re() -> &'static Regex {
    LINK_RE.get_or_init(|| {
        Regex::new(r"http[A-Za-z0-9:/@?!#_~.,;*+=\[\]()$'-]*").expect("Invalid link regex")
    })
}

/// Find the first embedded link in `text`.
///
/// Returns the substring starting at the first case-sensitive `http` and
/// extending through the last consecutive allowed character, or `None` when
/// no `http` occurs. A bare `http` followed by a disallowed character yields
/// `Some("http")`.
pub fn find_link(text: &str) -> Option<&str> {
    link_re().find(text).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_http_substring_yields_none() {
        assert_eq!(find_link(""), None);
        assert_eq!(find_link("a palette of muted greens"), None);
        assert_eq!(find_link("ftp://example.com"), None);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(find_link("HTTP://EXAMPLE.COM"), None);
        assert_eq!(find_link("Http://example.com"), None);
    }

    #[test]
    fn test_extracts_full_url() {
        assert_eq!(
            find_link("by jan, see https://lospec.com/palette-list/oil-6"),
            Some("https://lospec.com/palette-list/oil-6")
        );
    }

    #[test]
    fn test_stops_at_first_disallowed_character() {
        assert_eq!(
            find_link("link: https://example.com/a\"quoted\""),
            Some("https://example.com/a")
        );
        assert_eq!(find_link("see http://a b"), Some("http://a"));
    }

    #[test]
    fn test_trailing_bang_is_part_of_the_link() {
        assert_eq!(
            find_link("see https://example.com/x!"),
            Some("https://example.com/x!")
        );
    }

    #[test]
    fn test_parens_and_brackets_are_allowed() {
        assert_eq!(
            find_link("https://en.example.org/wiki/Hue_(color)[1]"),
            Some("https://en.example.org/wiki/Hue_(color)[1]")
        );
    }

    #[test]
    fn test_bare_http_before_disallowed_character() {
        assert_eq!(find_link("http <- no scheme"), Some("http"));
        assert_eq!(find_link("http"), Some("http"));
    }

    #[test]
    fn test_first_occurrence_wins() {
        assert_eq!(
            find_link("mirror http://a.example also http://b.example"),
            Some("http://a.example")
        );
    }

    #[test]
    fn test_matches_inside_unrelated_words() {
        // Permissive on purpose: no scheme validation, any literal "http"
        // anchors a match.
        assert_eq!(find_link("xhttpfoo bar"), Some("httpfoo"));
    }

    #[test]
    fn test_stops_at_non_ascii() {
        assert_eq!(find_link("http://exämple"), Some("http://ex"));
    }

    #[test]
    fn test_idempotent() {
        let text = "see https://example.com/x!";
        assert_eq!(find_link(text), find_link(text));
    }
}
