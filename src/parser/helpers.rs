//! Cursor movement and failure bookkeeping shared by every rule.

use super::error::{SyntaxError, SyntaxErrorKind};
use super::span::offset_to_location;

impl<'src> super::Parser<'src> {
    /// Unconsumed input.
    pub(super) fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }

    pub(super) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub(super) fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub(super) fn checkpoint(&self) -> usize {
        self.pos
    }

    pub(super) fn rewind(&mut self, checkpoint: usize) {
        self.pos = checkpoint;
    }

    /// Record that `label` was tried and failed at the current position.
    pub(super) fn expected(&mut self, label: &'static str) {
        if self.pos > self.furthest {
            self.furthest = self.pos;
            self.expected.clear();
        }
        if self.pos == self.furthest && !self.expected.contains(&label) {
            self.expected.push(label);
        }
    }

    /// Consume `literal` if it is next, recording `label` otherwise.
    pub(super) fn literal(&mut self, literal: &str, label: &'static str) -> bool {
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            true
        } else {
            self.expected(label);
            false
        }
    }

    /// Consume characters while `pred` holds and return them.
    pub(super) fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'src str {
        let rest = self.rest();
        let len = rest
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map_or(rest.len(), |(i, _)| i);
        self.pos += len;
        &rest[..len]
    }

    /// Like `take_while` but at least one character must match.
    pub(super) fn take_while1(
        &mut self,
        pred: impl Fn(char) -> bool,
        label: &'static str,
    ) -> Option<&'src str> {
        let taken = self.take_while(pred);
        if taken.is_empty() {
            self.expected(label);
            None
        } else {
            Some(taken)
        }
    }

    /// Build the error for the furthest failure seen so far.
    pub(super) fn furthest_error(&self) -> SyntaxError {
        let mut expected = self.expected.clone();
        expected.sort_unstable();

        SyntaxError::new(
            offset_to_location(self.source, self.furthest),
            SyntaxErrorKind::Unexpected {
                found: self.source[self.furthest..].chars().next(),
                expected,
            },
        )
    }

    pub(super) fn error_at(&self, offset: usize, kind: SyntaxErrorKind) -> SyntaxError {
        SyntaxError::new(offset_to_location(self.source, offset), kind)
    }
}
