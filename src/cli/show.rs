//! Show command implementation.
//!
//! Prints the structure of every package in a file, as a tree or as JSON.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::render::{render_json_pretty, render_tree};

use super::{options_for, parse_file};

/// Print the package structure of a definition file
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Definition file to show
    #[arg(required = true)]
    pub file: PathBuf,

    /// Print the syntax tree as JSON instead of a tree view
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ShowArgs, printer: &Printer) -> Result<()> {
    let doc = parse_file(&args.file, &options_for(&args.file)?)?;

    printer.info(
        "Parsed",
        &format!(
            "{} {}",
            plural(doc.packages.len(), "package", "packages"),
            printer.dim(&format!("({})", display_path(&args.file)))
        ),
    );

    if args.json {
        println!("{}", render_json_pretty(&doc)?);
    } else {
        print!("{}", render_tree(&doc));
    }

    Ok(())
}
