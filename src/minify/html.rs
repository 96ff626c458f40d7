//! HTML minifier

use once_cell::sync::Lazy;
use regex::Regex;

use super::{trim, SPACE, WHITESPACE_RE};

/// `<!-- ... -->`, non-greedy, may span lines
static COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("Invalid COMMENT_RE regex"));

/// Whitespace between a closing `>` and the next `<`
static BETWEEN_TAGS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(">{}+<", SPACE)).expect("Invalid BETWEEN_TAGS_RE regex")
});

pub fn minify_html(source: &str) -> String {
    let out = COMMENT_RE.replace_all(source, "");
    let out = WHITESPACE_RE.replace_all(&out, " ");
    let out = BETWEEN_TAGS_RE.replace_all(&out, "><");
    trim(&out).to_string()
}
