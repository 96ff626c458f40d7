//! Bundle rendering
//!
//! Output layout, one block per file:
//!
//! ```text
//! === path/to/file ===
//! <minified content>
//!
//! ```
//!
//! Blocks are separated by a blank line. No count header, no trailer.

use crate::core::model::Bundle;

/// Header line for a bundled file (without the newline)
pub fn header(path: &str) -> String {
    format!("=== {} ===", path)
}

/// Render a bundle to the text written to disk
pub fn render_bundle(bundle: &Bundle) -> String {
    bundle
        .entries
        .iter()
        .map(|entry| format!("{}\n{}\n", header(&entry.path), entry.content))
        .collect::<Vec<_>>()
        .join("\n")
}
