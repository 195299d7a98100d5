//! Check command implementation.
//!
//! Parses every discovered definition file and stops at the first syntax
//! error.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover, discover_paths};
use crate::error::Result;
use crate::output::{display_path, plural, Printer};

use super::parse_file;

/// Parse definition files and report syntax errors
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files or directories to check (default: project in current directory)
    pub paths: Vec<PathBuf>,

    /// Maximum struct nesting depth (overrides ludwieg.yaml)
    #[arg(long)]
    pub max_depth: Option<usize>,
}

/// Summary of a successful check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckSummary {
    pub files: usize,
    pub packages: usize,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<CheckSummary> {
    let discovery = if args.paths.is_empty() {
        discover(".")?
    } else {
        discover_paths(&args.paths)?
    };

    let mut options = discovery.manifest.parse_options();
    if let Some(depth) = args.max_depth {
        options.max_depth = depth;
    }

    if discovery.files.is_empty() {
        printer.warning("Warning", "no .lud files found");
        return Ok(CheckSummary::default());
    }

    let mut summary = CheckSummary::default();
    for file in &discovery.files {
        printer.status("Checking", &display_path(file));
        let doc = parse_file(file, &options)?;
        summary.files += 1;
        summary.packages += doc.packages.len();
    }

    printer.status(
        "Finished",
        &format!(
            "{} in {}",
            plural(summary.packages, "package", "packages"),
            plural(summary.files, "file", "files")
        ),
    );

    Ok(summary)
}
