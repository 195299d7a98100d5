//! Recursive-descent parser for Ludwieg definition files.
//!
//! The grammar is evaluated as ordered choice: every rule tries its
//! alternatives in a fixed order and commits to the first that matches. A
//! rule that fails consumes nothing, so the caller can try its next
//! alternative at the same position.
//!
//! # Document Structure
//!
//! ```text
//! // comments and blank lines are allowed between any two declarations
//! package user {
//!     id 0x01
//!     string name
//!     @address[*] addresses !deprecated
//!     struct address {
//!         string street
//!     }
//! }
//! ```
//!
//! # Usage
//!
//! ```
//! use ludwieg::parser::parse_document;
//!
//! let doc = parse_document("package p {\n    uint8 count\n}\n").unwrap();
//! assert_eq!(doc.packages[0].name, "p");
//! ```

mod blocks;
mod declarations;
mod error;
mod helpers;
mod lexical;
pub mod span;

pub use error::{SyntaxError, SyntaxErrorKind};
pub use span::{offset_to_location, Location};

use crate::types::Document;

/// Struct nesting allowed when no limit is configured.
///
/// Each level costs a few stack frames, so this stays well inside a default
/// thread stack.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Knobs for a single parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum struct nesting depth.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

/// Parser state for one input buffer.
pub(crate) struct Parser<'src> {
    source: &'src str,
    pos: usize,
    /// Furthest offset at which any primitive failed
    furthest: usize,
    /// Labels recorded at `furthest`
    expected: Vec<&'static str>,
    depth: usize,
    max_depth: usize,
}

impl<'src> Parser<'src> {
    pub(crate) fn new(source: &'src str, options: &ParseOptions) -> Self {
        Self {
            source,
            pos: 0,
            furthest: 0,
            expected: Vec::new(),
            depth: 0,
            max_depth: options.max_depth,
        }
    }
}

/// Parse a complete document with default options.
pub fn parse_document(source: &str) -> Result<Document, SyntaxError> {
    parse_document_with(source, &ParseOptions::default())
}

/// Parse a complete document.
///
/// Returns every package in source order, or the first syntax error. The
/// whole input must be consumed.
pub fn parse_document_with(source: &str, options: &ParseOptions) -> Result<Document, SyntaxError> {
    Parser::new(source, options).parse_document()
}
