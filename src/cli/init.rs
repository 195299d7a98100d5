//! Init command implementation.
//!
//! Generates a `ludwieg.yaml` manifest from the definition files found under
//! a directory.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{scan_directory, Manifest, MANIFEST_FILENAME};
use crate::error::{LudError, Result};
use crate::output::{display_path, plural, Printer};

/// Initialize a project by generating a ludwieg.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing ludwieg.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(LudError::Config {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    printer.status("Scanning", &display_path(&args.path));
    // Ignore any existing manifest so its sources do not narrow the scan.
    let files = scan_directory(&args.path, &Manifest::default());

    let source_dirs = source_directories(&args.path, &files);
    let yaml = manifest_yaml(&source_dirs);

    fs::write(&manifest_path, &yaml).map_err(|e| LudError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    if !source_dirs.is_empty() {
        let dirs: Vec<&str> = source_dirs.iter().map(|s| s.as_str()).collect();
        printer.info("Discovered", &dirs.join(", "));
    }

    printer.status(
        "Created",
        &format!(
            "{} ({} found)",
            MANIFEST_FILENAME,
            plural(files.len(), "definition", "definitions")
        ),
    );

    Ok(())
}

/// Unique parent directories of `files`, relative to `root`.
///
/// The root itself is written as `.`, anything below it with a trailing `/`.
fn source_directories(root: &Path, files: &[PathBuf]) -> BTreeSet<String> {
    let mut dirs = BTreeSet::new();
    for file in files {
        if let Some(parent) = file.parent() {
            let relative = parent.strip_prefix(root).unwrap_or(parent);
            let dir = if relative.as_os_str().is_empty() {
                ".".to_string()
            } else {
                format!("{}/", relative.display())
            };
            dirs.insert(dir);
        }
    }
    dirs
}

fn manifest_yaml(source_dirs: &BTreeSet<String>) -> String {
    let mut yaml = String::new();

    // Scanning the root is the default, so it needs no sources list.
    if !(source_dirs.is_empty() || (source_dirs.len() == 1 && source_dirs.contains("."))) {
        yaml.push_str("sources:\n");
        for dir in source_dirs {
            yaml.push_str(&format!("  - \"{}\"\n", dir));
        }
    }

    yaml.push_str("excludes: []\n");
    yaml
}
