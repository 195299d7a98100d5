//! File system scanner for definition files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// Extension of Ludwieg definition files.
pub const DEFINITION_EXTENSION: &str = "lud";

/// Whether a path names a definition file.
pub fn is_definition_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(DEFINITION_EXTENSION)
}

/// Recursively collect definition files under `root`, sorted by path.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> Vec<PathBuf> {
    if !root.exists() {
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| is_definition_file(path) && !manifest.is_excluded(path))
        .collect();

    files.sort();
    files
}

/// Scan every manifest source relative to `base_path`.
///
/// Overlapping sources yield each file once; the result is sorted by path.
pub fn scan_sources(sources: &[String], base_path: &Path, manifest: &Manifest) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for source in sources {
        let source_path = if Path::new(source).is_absolute() {
            PathBuf::from(source)
        } else {
            base_path.join(source)
        };
        files.extend(scan_directory(&normalize(&source_path), manifest));
    }

    files.sort();
    files.dedup();
    files
}

/// Drop `.` components so `root/./a.lud` prints as `root/a.lud`.
fn normalize(path: &Path) -> PathBuf {
    let normalized: PathBuf = path.components().collect();
    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}
