//! Fmt command implementation.
//!
//! Re-emits a definition file in canonical form. Comments are not kept, so
//! rewriting a commented file in place warns first.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{LudError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::render_source;

use super::{options_for, parse_source, read_file};

/// Print a definition file in canonical form
#[derive(Args, Debug)]
pub struct FmtArgs {
    /// Definition file to format
    #[arg(required = true)]
    pub file: PathBuf,

    /// Rewrite the file in place instead of printing to stdout
    #[arg(long, short)]
    pub write: bool,
}

pub fn run(args: FmtArgs, printer: &Printer) -> Result<()> {
    let source = read_file(&args.file)?;
    let doc = parse_source(&args.file, &source, &options_for(&args.file)?)?;
    let formatted = render_source(&doc);

    if args.write {
        let comments = comment_count(&source);
        if comments > 0 {
            printer.warning(
                "Warning",
                &format!(
                    "{} dropped from {}",
                    plural(comments, "comment", "comments"),
                    display_path(&args.file)
                ),
            );
        }

        fs::write(&args.file, &formatted).map_err(|e| LudError::Io {
            path: args.file.clone(),
            message: format!("Failed to write file: {}", e),
        })?;
        printer.status("Formatted", &display_path(&args.file));
    } else {
        print!("{}", formatted);
    }

    Ok(())
}

/// Number of `//` comments in text that has already parsed.
///
/// The grammar has no string literals, so every `//` opens a comment.
fn comment_count(source: &str) -> usize {
    source.lines().filter(|line| line.contains("//")).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_fmt_write_rewrites_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("user.lud");
        fs::write(&path, "// users\npackage user { id 0x01 string name }\n").unwrap();

        let args = FmtArgs {
            file: path.clone(),
            write: true,
        };
        run(args, &Printer::new().quiet(true)).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "package user {\n    id 0x01\n    string name\n}\n"
        );
    }

    #[test]
    fn test_comment_count() {
        assert_eq!(comment_count("package p {\n    uint8 a\n}\n"), 0);
        assert_eq!(
            comment_count("// top\npackage p {\n    uint8 a // trailing\n    // own line\n}\n"),
            3
        );
    }

    #[test]
    fn test_fmt_leaves_file_alone_on_syntax_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.lud");
        let original = "// keep me\npackage user {\n}\n";
        fs::write(&path, original).unwrap();

        let args = FmtArgs {
            file: path.clone(),
            write: true,
        };
        assert!(run(args, &Printer::new().quiet(true)).is_err());

        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }
}
