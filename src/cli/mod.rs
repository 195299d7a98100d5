pub mod check;
pub mod completions;
pub mod fmt;
pub mod init;
pub mod show;

use std::fs;
use std::path::Path;

use clap::{Parser, Subcommand};

use crate::discovery::find_manifest;
use crate::error::{LudError, Result};
use crate::parser::{parse_document_with, ParseOptions};
use crate::types::Document;

/// ludwieg - Ludwieg package definition tools
#[derive(Parser, Debug)]
#[command(name = "ludwieg")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only print warnings and errors
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse definition files and report syntax errors
    Check(check::CheckArgs),

    /// Print the package structure of a definition file
    Show(show::ShowArgs),

    /// Print a definition file in canonical form
    Fmt(fmt::FmtArgs),

    /// Initialize a project (generates ludwieg.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Read and parse one definition file.
///
/// Syntax errors carry the file's text so they render with context.
pub fn parse_file(path: &Path, options: &ParseOptions) -> Result<Document> {
    let source = read_file(path)?;
    parse_source(path, &source, options)
}

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| LudError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })
}

/// Parse text read from `path`.
pub fn parse_source(path: &Path, source: &str, options: &ParseOptions) -> Result<Document> {
    parse_document_with(source, options).map_err(|e| LudError::syntax_in_file(path, source, e))
}

/// Parser options from the nearest ludwieg.yaml above `path`, or defaults.
pub fn options_for(path: &Path) -> Result<ParseOptions> {
    Ok(find_manifest(path)?
        .map(|(_, manifest)| manifest.parse_options())
        .unwrap_or_default())
}
