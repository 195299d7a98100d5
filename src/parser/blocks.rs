//! Block rules: structs, packages and the document.
//!
//! A block body is a run of members separated by trivia. It must contain
//! at least one member or comment; comments are skipped and never appear in
//! the parsed contents.

use crate::types::{Document, Package, PackageMember, Struct, StructMember};

use super::error::{SyntaxError, SyntaxErrorKind};
use super::Parser;

type RuleResult<T> = Result<Option<T>, SyntaxError>;

impl<'src> Parser<'src> {
    /// Trivia, one or more packages, trivia, end of input.
    pub(super) fn parse_document(mut self) -> Result<Document, SyntaxError> {
        self.skip_trivia();

        let mut packages = Vec::new();
        while let Some(package) = self.package()? {
            packages.push(package);
            self.skip_trivia();
        }

        if packages.is_empty() {
            return Err(self.furthest_error());
        }
        if !self.at_end() {
            self.expected("end of input");
            return Err(self.furthest_error());
        }

        Ok(Document::new(packages))
    }

    /// `package name { members }`.
    fn package(&mut self) -> RuleResult<Package> {
        let start = self.checkpoint();
        if !self.keyword("package", "`package`") {
            return Ok(None);
        }
        let Some(name) = self.block_header() else {
            self.rewind(start);
            return Ok(None);
        };
        match self.block_body(Self::package_member)? {
            Some(contents) => Ok(Some(Package::new(name, contents))),
            None => {
                self.rewind(start);
                Ok(None)
            }
        }
    }

    /// Tried in order: id declaration, field, array, struct.
    fn package_member(&mut self) -> RuleResult<PackageMember> {
        if let Some(id) = self.id_declaration() {
            return Ok(Some(id.into()));
        }
        if let Some(field) = self.field() {
            return Ok(Some(field.into()));
        }
        if let Some(array) = self.array() {
            return Ok(Some(array.into()));
        }
        Ok(self.struct_block()?.map(PackageMember::Struct))
    }

    /// `struct name { members }`, nested up to `max_depth` levels.
    fn struct_block(&mut self) -> RuleResult<Struct> {
        let start = self.checkpoint();
        if !self.keyword("struct", "`struct`") {
            return Ok(None);
        }
        if self.depth >= self.max_depth {
            let limit = self.max_depth;
            return Err(self.error_at(start, SyntaxErrorKind::TooDeep { limit }));
        }
        let Some(name) = self.block_header() else {
            self.rewind(start);
            return Ok(None);
        };

        self.depth += 1;
        let body = self.block_body(Self::struct_member);
        self.depth -= 1;

        match body? {
            Some(contents) => Ok(Some(Struct::new(name, contents))),
            None => {
                self.rewind(start);
                Ok(None)
            }
        }
    }

    /// Tried in order: field, array, struct.
    fn struct_member(&mut self) -> RuleResult<StructMember> {
        if let Some(field) = self.field() {
            return Ok(Some(field.into()));
        }
        if let Some(array) = self.array() {
            return Ok(Some(array.into()));
        }
        Ok(self.struct_block()?.map(StructMember::Struct))
    }

    /// Whitespace, the block name, optional whitespace and `{`, all on the
    /// keyword's line.
    fn block_header(&mut self) -> Option<String> {
        if !self.inline_space1() {
            return None;
        }
        let name = self.item_name()?.to_string();
        self.inline_space();
        if !self.literal("{", "`{`") {
            return None;
        }
        Some(name)
    }

    /// Members up to and including the closing `}`.
    fn block_body<T>(&mut self, member: fn(&mut Self) -> RuleResult<T>) -> RuleResult<Vec<T>> {
        let mut saw_comment = self.skip_trivia();
        let mut contents = Vec::new();

        while let Some(item) = member(self)? {
            contents.push(item);
            saw_comment |= self.skip_trivia();
        }

        if contents.is_empty() && !saw_comment {
            return Ok(None);
        }
        if !self.literal("}", "`}`") {
            return Ok(None);
        }
        Ok(Some(contents))
    }
}
