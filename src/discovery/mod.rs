//! Finding definition files for the CLI.
//!
//! Either scans a project directory (honouring a `ludwieg.yaml` manifest
//! when one is present) or takes explicit paths from the command line.
//!
//! # Example
//!
//! ```ignore
//! use ludwieg::discovery::discover;
//!
//! let result = discover("./schemas")?;
//! println!("Found {} files", result.files.len());
//! ```

mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::{LudError, Result};

pub use manifest::Manifest;
pub use scanner::{is_definition_file, scan_directory, scan_sources, DEFINITION_EXTENSION};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "ludwieg.yaml";

/// Result of discovering definition files.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no ludwieg.yaml was found).
    pub manifest: Manifest,

    /// Whether a ludwieg.yaml manifest was found.
    pub has_manifest: bool,

    /// Definition files; sorted by path when scanned from manifest sources.
    pub files: Vec<PathBuf>,
}

/// Discover definition files in a project directory.
///
/// Uses the manifest's source paths when `root` contains a ludwieg.yaml,
/// otherwise scans the whole directory.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();

    let manifest_path = root.join(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    let files = scan_sources(&manifest.effective_sources(), &root, &manifest);

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        files,
    })
}

/// Find the nearest ludwieg.yaml at or above `path`.
///
/// A file path starts the search in its own directory. Returns the
/// directory holding the manifest along with the manifest.
pub fn find_manifest(path: &Path) -> Result<Option<(PathBuf, Manifest)>> {
    let start = if path.is_dir() {
        path
    } else {
        path.parent().unwrap_or(Path::new(""))
    };
    let start = if start.as_os_str().is_empty() {
        Path::new(".")
    } else {
        start
    };
    let start = start.canonicalize().unwrap_or_else(|_| start.to_path_buf());

    for dir in start.ancestors() {
        let candidate = dir.join(MANIFEST_FILENAME);
        if candidate.is_file() {
            return Ok(Some((dir.to_path_buf(), Manifest::load(&candidate)?)));
        }
    }
    Ok(None)
}

/// Discover definition files from explicit paths.
///
/// Directories are scanned recursively; files are taken as given whatever
/// their extension. A path that does not exist is an error. The nearest
/// manifest above the first path supplies excludes and parser options.
pub fn discover_paths(paths: &[PathBuf]) -> Result<DiscoveryResult> {
    let found = match paths.first() {
        Some(first) => find_manifest(first)?,
        None => None,
    };
    let has_manifest = found.is_some();
    let (manifest_root, manifest) = found.unzip();
    let manifest = manifest.unwrap_or_default();
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            files.extend(scan_directory(path, &manifest));
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            return Err(LudError::Io {
                path: path.clone(),
                message: "No such file or directory".to_string(),
            });
        }
    }

    let root = manifest_root.unwrap_or_else(|| {
        paths
            .first()
            .and_then(|p| p.parent())
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
    });

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        files,
    })
}
