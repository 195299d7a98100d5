//! Lexical primitives: whitespace, comments and literals.
//!
//! Two kinds of whitespace exist. Same-line whitespace (space and tab) sits
//! between the tokens of a single declaration. Trivia (any whitespace plus
//! `//` comments) sits between declarations and around block braces.

pub(super) fn is_inline_space(c: char) -> bool {
    c == ' ' || c == '\t'
}

pub(super) fn is_line_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

pub(super) fn is_name_char(c: char) -> bool {
    c.is_ascii_lowercase() || c == '_'
}

/// Characters that may not directly follow a keyword.
pub(super) fn continues_word(c: char) -> bool {
    is_name_char(c) || c.is_ascii_digit()
}

impl<'src> super::Parser<'src> {
    /// Zero or more spaces or tabs.
    pub(super) fn inline_space(&mut self) -> &'src str {
        self.take_while(is_inline_space)
    }

    /// One or more spaces or tabs.
    pub(super) fn inline_space1(&mut self) -> bool {
        self.take_while1(is_inline_space, "whitespace").is_some()
    }

    /// Skip whitespace, line breaks and comments.
    ///
    /// Returns whether at least one comment was skipped.
    pub(super) fn skip_trivia(&mut self) -> bool {
        let mut saw_comment = false;
        loop {
            self.take_while(is_line_space);
            if self.comment() {
                saw_comment = true;
            } else {
                return saw_comment;
            }
        }
    }

    /// `// text` up to and including the line break (or end of input).
    pub(super) fn comment(&mut self) -> bool {
        if !self.rest().starts_with("//") {
            return false;
        }
        self.take_while(|c| c != '\n');
        if self.peek() == Some('\n') {
            self.pos += 1;
        }
        true
    }

    /// Zero or more decimal digits.
    pub(super) fn digits(&mut self) -> &'src str {
        self.take_while(|c| c.is_ascii_digit())
    }

    /// `0x` followed by one or more hex digits, returned verbatim.
    pub(super) fn hex_value(&mut self) -> Option<&'src str> {
        let start = self.checkpoint();
        if !self.literal("0x", "hex value") {
            return None;
        }
        if self
            .take_while1(|c| c.is_ascii_hexdigit(), "hex digit")
            .is_none()
        {
            self.rewind(start);
            return None;
        }
        Some(&self.source[start..self.pos])
    }

    /// One or more lowercase letters or underscores.
    pub(super) fn item_name(&mut self) -> Option<&'src str> {
        self.take_while1(is_name_char, "identifier")
    }

    /// A keyword that is not the prefix of a longer word.
    pub(super) fn keyword(&mut self, keyword: &'static str, label: &'static str) -> bool {
        let start = self.checkpoint();
        if !self.literal(keyword, label) {
            return false;
        }
        if self.peek().is_some_and(continues_word) {
            self.rewind(start);
            self.expected(label);
            return false;
        }
        true
    }
}
