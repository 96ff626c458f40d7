//! Bundle data model
//!
//! A run turns tracked paths into transient `FileRecord`s, which are folded
//! into the ordered `Bundle` that gets written to disk.

use std::fmt;

/// Transform family selected by a file's extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Html,
    /// css and scss
    Css,
    Js,
    /// json and source maps
    Json,
    /// Anything else: generic whitespace collapse
    Other,
}

impl FileKind {
    /// Pick the transform for a lowercased extension (without the dot)
    pub fn from_extension(ext: Option<&str>) -> Self {
        match ext {
            Some("html") => FileKind::Html,
            Some("css") | Some("scss") => FileKind::Css,
            Some("js") => FileKind::Js,
            Some("json") | Some("map") => FileKind::Json,
            _ => FileKind::Other,
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileKind::Html => "html",
            FileKind::Css => "css",
            FileKind::Js => "js",
            FileKind::Json => "json",
            FileKind::Other => "other",
        };
        write!(f, "{}", name)
    }
}

/// One tracked file on its way into the bundle
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Path relative to the repository root, '/'-separated
    pub path: String,
    /// Lowercased extension, if any
    pub extension: Option<String>,
    /// Content as read from disk
    pub raw: String,
    /// Content after minification
    pub minified: String,
}

impl FileRecord {
    pub fn kind(&self) -> FileKind {
        FileKind::from_extension(self.extension.as_deref())
    }
}

/// A (path, minified content) pair in the bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleEntry {
    pub path: String,
    pub content: String,
}

/// Size accounting for a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BundleStats {
    pub raw_bytes: usize,
    pub minified_bytes: usize,
}

/// The aggregate output, in insertion (sorted path) order
#[derive(Debug, Clone, Default)]
pub struct Bundle {
    pub entries: Vec<BundleEntry>,
    pub stats: BundleStats,
}

impl Bundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a record into the bundle, dropping its raw content
    pub fn push(&mut self, record: FileRecord) {
        self.stats.raw_bytes += record.raw.len();
        self.stats.minified_bytes += record.minified.len();
        self.entries.push(BundleEntry {
            path: record.path,
            content: record.minified,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
