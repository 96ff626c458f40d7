//! Minifiers - Regex heuristics that shrink web sources
//!
//! Provides:
//! - html: comment removal and whitespace collapse between tags
//! - css: comment removal and tightening around punctuation (also scss)
//! - js: block/line comment removal and tightening around operators
//! - json: compact re-serialisation (also source maps)
//!
//! None of these is a tokenizer. Comment-like sequences inside string or
//! regex literals can be rewritten.

pub mod css;
pub mod html;
pub mod js;
pub mod json;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::model::FileKind;

/// One whitespace character as JavaScript sees it: Unicode White_Space
/// plus U+FEFF, minus U+0085
pub(crate) const SPACE: &str = r"[\s\x{FEFF}--\x{85}]";

/// Any run of whitespace, newlines included
pub(crate) static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("{}+", SPACE)).expect("Invalid WHITESPACE_RE regex")
});

/// Minify `content` with the transform selected by `kind`.
///
/// A single leading byte-order mark is dropped first.
pub fn minify(content: &str, kind: FileKind) -> String {
    let source = strip_bom(content);
    match kind {
        FileKind::Html => html::minify_html(source),
        FileKind::Css => css::minify_css(source),
        FileKind::Js => js::minify_js(source),
        FileKind::Json => json::minify_json(source),
        FileKind::Other => collapse_whitespace(source),
    }
}

/// Collapse every whitespace run to one space and trim
pub fn collapse_whitespace(source: &str) -> String {
    trim(&WHITESPACE_RE.replace_all(source, " ")).to_string()
}

/// Trim the characters matched by `SPACE` from both ends
pub(crate) fn trim(source: &str) -> &str {
    source.trim_matches(is_space)
}

fn is_space(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

fn strip_bom(content: &str) -> &str {
    content.strip_prefix('\u{FEFF}').unwrap_or(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \n\t b\r\n c  "), "a b c");
        assert_eq!(collapse_whitespace("\n\n"), "");
    }

    #[test]
    fn test_collapse_treats_inner_bom_as_whitespace() {
        assert_eq!(collapse_whitespace("a\u{FEFF}b  c"), "a b c");
        assert_eq!(collapse_whitespace("\u{FEFF} x \u{FEFF}"), "x");
    }

    #[test]
    fn test_next_line_is_not_whitespace() {
        assert_eq!(collapse_whitespace("a\u{85}b"), "a\u{85}b");
        assert_eq!(collapse_whitespace("\u{85}a\u{85}"), "\u{85}a\u{85}");
        assert_eq!(collapse_whitespace("a\u{A0}\u{3000}b"), "a b");
    }

    #[test]
    fn test_trim_matches_space_class() {
        assert_eq!(trim("\u{FEFF}\n x \u{2028}"), "x");
        assert_eq!(trim("\u{85}x"), "\u{85}x");
    }

    #[test]
    fn test_strip_bom_only_once() {
        assert_eq!(strip_bom("\u{FEFF}\u{FEFF}x"), "\u{FEFF}x");
        assert_eq!(strip_bom("x\u{FEFF}"), "x\u{FEFF}");
    }

    #[test]
    fn test_minify_strips_bom_before_json_parse() {
        assert_eq!(minify("\u{FEFF}{ \"a\": 1 }", FileKind::Json), r#"{"a":1}"#);
    }

    #[test]
    fn test_minify_dispatches_by_kind() {
        assert_eq!(minify("<p> a </p>\n<p>b</p>", FileKind::Html), "<p> a </p><p>b</p>");
        assert_eq!(minify("a { color : red ; }", FileKind::Css), "a{color:red;}");
        assert_eq!(minify("x = y + 1 ;", FileKind::Js), "x=y+1;");
        assert_eq!(minify("a {  b }", FileKind::Other), "a { b }");
    }
}
