//! Syntax errors reported by the parser.

use thiserror::Error;

use super::span::Location;

/// Why the parse stopped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    /// No alternative matched at the furthest position reached.
    #[error("unexpected {}, expected {}", describe_found(.found), describe_expected(.expected))]
    Unexpected {
        /// Character at the failure position, `None` at end of input
        found: Option<char>,
        /// Sorted labels of everything tried at that position
        expected: Vec<&'static str>,
    },

    /// A struct was nested past the configured limit.
    #[error("structs nested deeper than {limit} levels")]
    TooDeep { limit: usize },
}

/// A parse failure at a precise source location.
///
/// No partial document is ever returned alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error at {location}: {kind}")]
pub struct SyntaxError {
    pub location: Location,
    pub kind: SyntaxErrorKind,
}

impl SyntaxError {
    pub fn new(location: Location, kind: SyntaxErrorKind) -> Self {
        Self { location, kind }
    }

    /// Byte offset of the failure.
    pub fn offset(&self) -> usize {
        self.location.offset
    }

    /// The alternatives that were attempted at the failure position.
    pub fn expected(&self) -> &[&'static str] {
        match &self.kind {
            SyntaxErrorKind::Unexpected { expected, .. } => expected,
            SyntaxErrorKind::TooDeep { .. } => &[],
        }
    }

    /// Byte length of the offending input, for highlighting.
    pub fn len(&self) -> usize {
        match &self.kind {
            SyntaxErrorKind::Unexpected { found, .. } => found.map_or(0, char::len_utf8),
            SyntaxErrorKind::TooDeep { .. } => "struct".len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Suggestion text listing what would have been accepted.
    pub fn help(&self) -> Option<String> {
        match &self.kind {
            SyntaxErrorKind::Unexpected { expected, .. } if !expected.is_empty() => {
                Some(format!("expected {}", describe_expected(expected)))
            }
            SyntaxErrorKind::Unexpected { .. } => None,
            SyntaxErrorKind::TooDeep { .. } => {
                Some("raise max_depth in ludwieg.yaml or flatten the structs".to_string())
            }
        }
    }
}

fn describe_found(found: &Option<char>) -> String {
    match found {
        None => "end of input".to_string(),
        Some('\n') => "newline".to_string(),
        Some(c) => format!("'{}'", c.escape_debug()),
    }
}

fn describe_expected(expected: &[&'static str]) -> String {
    match expected {
        [] => "nothing".to_string(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} or {}", init.join(", "), last),
    }
}
