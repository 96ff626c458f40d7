//! Bundle flow - Minify every tracked web source into one file
//!
//! Strictly linear: list, filter, sort, read, minify, aggregate, write.
//! The first listing, read or write error aborts the run.

use anyhow::Result;
use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::backends::git::FileLister;
use crate::core::config::{is_excluded_file, is_included_extension, OUTPUT_FILE};
use crate::core::error::{BundleError, BundleResult};
use crate::core::model::{Bundle, FileRecord};
use crate::core::paths::{basename, extension, join_tracked};
use crate::core::render::render_bundle;
use crate::minify::minify;

/// Keep allow-listed, non-denylisted paths, sorted for output
pub fn filter_paths(paths: Vec<String>) -> BundleResult<Vec<String>> {
    let collator = path_collator()?;
    let mut kept: Vec<String> = paths
        .into_iter()
        .filter(|path| !is_excluded_file(basename(path)))
        .filter(|path| {
            extension(path)
                .map(|ext| is_included_extension(&ext))
                .unwrap_or(false)
        })
        .collect();
    kept.sort_by(|a, b| compare_paths(&collator, a, b));
    Ok(kept)
}

/// Root-locale collator, tertiary strength, punctuation non-ignorable
pub fn path_collator() -> BundleResult<Collator> {
    Collator::try_new(&Default::default(), CollatorOptions::new()).map_err(|err| {
        BundleError::Collation {
            message: err.to_string(),
        }
    })
}

/// Locale-aware order; byte order only separates collation-equal paths
pub fn compare_paths(collator: &Collator, a: &str, b: &str) -> Ordering {
    collator.compare(a, b).then_with(|| a.cmp(b))
}

/// Read and minify one tracked file
pub fn read_record(root: &Path, path: &str) -> BundleResult<FileRecord> {
    let absolute = join_tracked(root, path);
    let bytes = fs::read(&absolute).map_err(|source| BundleError::Read {
        path: absolute.clone(),
        source,
    })?;
    let raw = decode_lossy(bytes);

    let mut record = FileRecord {
        path: path.to_string(),
        extension: extension(path),
        raw,
        minified: String::new(),
    };
    record.minified = minify(&record.raw, record.kind());
    debug!(
        "{} ({}): {} -> {} bytes",
        record.path,
        record.kind(),
        record.raw.len(),
        record.minified.len()
    );
    Ok(record)
}

/// Decode as UTF-8, replacing invalid sequences with U+FFFD
fn decode_lossy(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}

/// Build the in-memory bundle for every selected file
pub fn build_bundle(lister: &dyn FileLister) -> BundleResult<Bundle> {
    let tracked = lister.list_files()?;
    let total = tracked.len();
    let selected = filter_paths(tracked)?;
    info!("Selected {} of {} tracked files", selected.len(), total);

    let mut bundle = Bundle::new();
    for path in &selected {
        bundle.push(read_record(lister.root(), path)?);
    }
    Ok(bundle)
}

/// Write the rendered bundle to the output file under `root`, replacing it
pub fn write_bundle(root: &Path, bundle: &Bundle) -> BundleResult<PathBuf> {
    let destination = root.join(OUTPUT_FILE);
    fs::write(&destination, render_bundle(bundle)).map_err(|source| BundleError::Write {
        path: destination.clone(),
        source,
    })?;
    Ok(destination)
}

/// Generate the bundle and return the path that was written
pub fn generate(lister: &dyn FileLister) -> BundleResult<PathBuf> {
    let bundle = build_bundle(lister)?;
    let destination = write_bundle(lister.root(), &bundle)?;

    if bundle.is_empty() {
        warn!("No tracked file matched the bundled extensions");
    }
    info!(
        "Bundled {} files: {} -> {} bytes",
        bundle.len(),
        bundle.stats.raw_bytes,
        bundle.stats.minified_bytes
    );
    Ok(destination)
}

/// Run the bundle flow and report the output path
pub fn run_bundle(lister: &dyn FileLister) -> Result<()> {
    let destination = generate(lister)?;
    println!("Generated file: {}", destination.display());
    Ok(())
}
