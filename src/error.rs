use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::parser::SyntaxError;

/// Main error type for ludwieg operations
#[derive(Error, Diagnostic, Debug)]
pub enum LudError {
    #[error("{path}: {error}")]
    #[diagnostic(code(ludwieg::syntax))]
    SyntaxInFile {
        path: PathBuf,
        error: SyntaxError,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
        #[help]
        help: Option<String>,
    },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(ludwieg::io))]
    Io { path: PathBuf, message: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(ludwieg::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Render error: {message}")]
    #[diagnostic(code(ludwieg::render))]
    Render { message: String },
}

impl LudError {
    /// Attach the file and its text to a syntax error for display.
    pub fn syntax_in_file(path: &Path, source: &str, error: SyntaxError) -> Self {
        let span = SourceSpan::from((error.offset(), error.len()));
        LudError::SyntaxInFile {
            path: path.to_path_buf(),
            help: error.help(),
            src: NamedSource::new(path.display().to_string(), source.to_string()),
            span,
            error,
        }
    }

    /// The underlying syntax error, if this is one.
    pub fn syntax_error(&self) -> Option<&SyntaxError> {
        match self {
            LudError::SyntaxInFile { error, .. } => Some(error),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LudError>;
