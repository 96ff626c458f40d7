//! JavaScript minifier
//!
//! The `//` guard only checks the preceding character: `http://` survives,
//! but a `//` inside a string or regex literal does not.

use once_cell::sync::Lazy;
use regex::Regex;

use super::css::BLOCK_COMMENT_RE;
use super::{trim, SPACE, WHITESPACE_RE};

/// `// ...` to end of line unless the `//` follows a ':'
static LINE_COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mR)(^|[^:])//.*$").expect("Invalid LINE_COMMENT_RE regex"));

static OPERATOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"{0}*([{{}};:,=()+\-*/<>]){0}*", SPACE))
        .expect("Invalid OPERATOR_RE regex")
});

pub fn minify_js(source: &str) -> String {
    let out = BLOCK_COMMENT_RE.replace_all(source, "");
    let out = LINE_COMMENT_RE.replace_all(&out, "$1");
    let out = WHITESPACE_RE.replace_all(&out, " ");
    let out = OPERATOR_RE.replace_all(&out, "$1");
    trim(&out).to_string()
}
