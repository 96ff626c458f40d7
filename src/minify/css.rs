//! CSS / SCSS minifier

use once_cell::sync::Lazy;
use regex::Regex;

use super::{trim, SPACE, WHITESPACE_RE};

/// `/* ... */`, non-greedy, may span lines
pub(crate) static BLOCK_COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("Invalid BLOCK_COMMENT_RE regex"));

static PUNCTUATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"{0}*([{{}};:,]){0}*", SPACE)).expect("Invalid PUNCTUATION_RE regex")
});

static IMPORTANT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("{}*!important", SPACE)).expect("Invalid IMPORTANT_RE regex")
});

pub fn minify_css(source: &str) -> String {
    let out = BLOCK_COMMENT_RE.replace_all(source, "");
    let out = WHITESPACE_RE.replace_all(&out, " ");
    let out = PUNCTUATION_RE.replace_all(&out, "$1");
    let out = IMPORTANT_RE.replace_all(&out, "!important");
    trim(&out).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tightens_punctuation() {
        assert_eq!(minify_css("body {  color : red ;  }"), "body{color:red;}");
    }

    #[test]
    fn test_removes_block_comments() {
        let css = "/* header\n * banner */\na { margin: 0 } /* trailing */";
        assert_eq!(minify_css(css), "a{margin:0}");
    }

    #[test]
    fn test_byte_order_mark_counts_as_whitespace() {
        assert_eq!(minify_css("a {\u{FEFF}color : red }"), "a{color:red}");
    }

    #[test]
    fn test_important() {
        assert_eq!(
            minify_css("p { color: red  !important; }"),
            "p{color:red!important;}"
        );
    }

    #[test]
    fn test_selector_lists_and_scss_nesting() {
        let scss = "h1,\nh2 {\n  .x { top: 0; }\n}\n";
        assert_eq!(minify_css(scss), "h1,h2{.x{top:0;}}");
    }

    #[test]
    fn test_pseudo_selector_space_is_removed() {
        // heuristic: descendant combinator before ':' is lost
        assert_eq!(minify_css("div :hover { }"), "div:hover{}");
    }
}
