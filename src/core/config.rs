//! Fixed bundle configuration
//!
//! Nothing here is configurable at runtime: the extension allow-list, the
//! filename denylist and the output location are part of the tool.

/// Extensions (lowercase, without the dot) whose files are bundled.
pub const INCLUDE_EXTENSIONS: &[&str] = &["html", "css", "scss", "js", "json", "map"];

/// Basenames that are never bundled, wherever they appear in the tree.
pub const EXCLUDED_FILES: &[&str] = &[".DS_Store"];

/// Output file name, written at the repository root.
pub const OUTPUT_FILE: &str = "codigo_minificado.txt";

/// Returns true if `ext` (any case) is in the allow-list
pub fn is_included_extension(ext: &str) -> bool {
    let ext = ext.to_lowercase();
    INCLUDE_EXTENSIONS.contains(&ext.as_str())
}

/// Returns true if `name` is a denylisted basename (exact match)
pub fn is_excluded_file(name: &str) -> bool {
    EXCLUDED_FILES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_included_extensions_case_insensitive() {
        assert!(is_included_extension("js"));
        assert!(is_included_extension("JSON"));
        assert!(is_included_extension("Scss"));
        assert!(!is_included_extension("ts"));
        assert!(!is_included_extension(""));
    }

    #[test]
    fn test_excluded_file_is_exact() {
        assert!(is_excluded_file(".DS_Store"));
        assert!(!is_excluded_file(".ds_store"));
        assert!(!is_excluded_file("x.DS_Store"));
    }
}
