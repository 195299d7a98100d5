//! Type references and single-line declarations.
//!
//! ```text
//! id 0x01                      identifier
//! uint8 count                  field
//! @point origin !deprecated    field with a user type and an attribute
//! uint32[4] values             array, canonical form
//! uint32 values[4]             array, size after the name
//! @point[*] points             array of any length
//! ```

use crate::types::{Array, ArraySize, Attribute, Field, IdDeclaration, NativeType, TypeRef};

use super::lexical::continues_word;

impl<'src> super::Parser<'src> {
    /// One of the native keywords, tried in declaration order.
    pub(super) fn native_type(&mut self) -> Option<NativeType> {
        for native in NativeType::ALL {
            let keyword = native.keyword();
            let rest = self.rest();
            if rest.starts_with(keyword) && !rest[keyword.len()..].starts_with(continues_word) {
                self.pos += keyword.len();
                return Some(native);
            }
        }
        self.expected("type");
        None
    }

    /// `@name`, with no whitespace after the `@`.
    pub(super) fn user_type(&mut self) -> Option<String> {
        let start = self.checkpoint();
        if !self.literal("@", "`@`") {
            return None;
        }
        match self.item_name() {
            Some(name) => Some(name.to_string()),
            None => {
                self.rewind(start);
                None
            }
        }
    }

    /// Native types are tried before user types.
    pub(super) fn type_ref(&mut self) -> Option<TypeRef> {
        if let Some(native) = self.native_type() {
            return Some(TypeRef::Native(native));
        }
        self.user_type().map(TypeRef::User)
    }

    /// `[*]`, `[N]` or `[]`.
    pub(super) fn array_size(&mut self) -> Option<ArraySize> {
        let start = self.checkpoint();
        if !self.literal("[", "`[`") {
            return None;
        }

        let size = if self.rest().starts_with('*') {
            self.pos += 1;
            ArraySize::Dynamic
        } else {
            self.expected("`*`");
            let digits = self.digits();
            if digits.is_empty() {
                self.expected("digit");
            }
            ArraySize::fixed(digits)
        };

        if !self.literal("]", "`]`") {
            self.rewind(start);
            return None;
        }
        Some(size)
    }

    /// `!flag`, optionally preceded by same-line whitespace.
    pub(super) fn attribute(&mut self) -> Option<Attribute> {
        let start = self.checkpoint();
        self.inline_space();
        if !self.literal("!", "`!`") {
            self.rewind(start);
            return None;
        }
        for attribute in Attribute::ALL {
            if self.keyword(attribute.keyword(), "attribute") {
                return Some(attribute);
            }
        }
        self.rewind(start);
        None
    }

    /// One or more attributes; `None` when there are none.
    pub(super) fn attribute_list(&mut self) -> Option<Vec<Attribute>> {
        let mut attributes = Vec::new();
        while let Some(attribute) = self.attribute() {
            attributes.push(attribute);
        }
        if attributes.is_empty() {
            None
        } else {
            Some(attributes)
        }
    }

    /// `type name attributes?`.
    ///
    /// Declines when the name is followed by `[`, leaving that form to the
    /// array rule.
    pub(super) fn field(&mut self) -> Option<Field> {
        let start = self.checkpoint();
        let ty = self.type_ref()?;
        let Some(name) = self.declared_name() else {
            self.rewind(start);
            return None;
        };
        if self.rest().starts_with('[') {
            self.rewind(start);
            return None;
        }

        Some(Field {
            ty,
            name,
            attributes: self.attribute_list(),
        })
    }

    /// `type[size] name attributes?` or `type name[size] attributes?`.
    pub(super) fn array(&mut self) -> Option<Array> {
        let start = self.checkpoint();
        let ty = self.type_ref()?;

        let parsed = if let Some(size) = self.array_size() {
            self.declared_name().map(|name| (size, name))
        } else {
            self.declared_name()
                .and_then(|name| self.array_size().map(|size| (size, name)))
        };
        let Some((size, name)) = parsed else {
            self.rewind(start);
            return None;
        };

        Some(Array {
            ty,
            size,
            name,
            attributes: self.attribute_list(),
        })
    }

    /// `id 0x..`.
    pub(super) fn id_declaration(&mut self) -> Option<IdDeclaration> {
        let start = self.checkpoint();
        if !self.keyword("id", "`id`") {
            return None;
        }
        if !self.inline_space1() {
            self.rewind(start);
            return None;
        }
        match self.hex_value() {
            Some(value) => Some(IdDeclaration::new(value)),
            None => {
                self.rewind(start);
                None
            }
        }
    }

    /// Mandatory same-line whitespace, then a name.
    fn declared_name(&mut self) -> Option<String> {
        if !self.inline_space1() {
            return None;
        }
        self.item_name().map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{ParseOptions, Parser};
    use crate::types::{Array, ArraySize, Attribute, Field, NativeType, TypeRef};
    use pretty_assertions::assert_eq;

    fn parser(source: &str) -> Parser<'_> {
        Parser::new(source, &ParseOptions::default())
    }

    #[test]
    fn test_every_native_keyword() {
        for native in NativeType::ALL {
            let source = format!("{} x", native.keyword());
            assert_eq!(parser(&source).native_type(), Some(native));
        }
    }

    #[test]
    fn test_native_keyword_needs_word_boundary() {
        let mut p = parser("uint8count");
        assert_eq!(p.native_type(), None);
        assert_eq!(p.checkpoint(), 0);

        assert_eq!(parser("bytes").native_type(), None);
        assert_eq!(parser("uint8[4]").native_type(), Some(NativeType::Uint8));
    }

    #[test]
    fn test_user_type_needs_adjacent_name() {
        assert_eq!(parser("@point p").user_type(), Some("point".to_string()));

        let mut p = parser("@ point");
        assert_eq!(p.user_type(), None);
        assert_eq!(p.checkpoint(), 0);
    }

    #[test]
    fn test_type_ref_prefers_native() {
        assert_eq!(parser("any x").type_ref(), Some(TypeRef::Native(NativeType::Any)));
        assert_eq!(parser("@any x").type_ref(), Some(TypeRef::user("any")));
    }

    #[test]
    fn test_array_sizes() {
        assert_eq!(parser("[*]").array_size(), Some(ArraySize::Dynamic));
        assert_eq!(parser("[32]").array_size(), Some(ArraySize::fixed("32")));
        assert_eq!(parser("[]").array_size(), Some(ArraySize::fixed("")));
        assert_eq!(parser("[ 4]").array_size(), None);
        assert_eq!(parser("[4").array_size(), None);
    }

    #[test]
    fn test_field_without_attributes_has_none() {
        let field = parser("string name\n").field().unwrap();
        assert_eq!(field, Field::new(NativeType::String, "name"));
        assert_eq!(field.attributes, None);
    }

    #[test]
    fn test_field_requires_whitespace_before_name() {
        let mut p = parser("uint8\tcount");
        assert!(p.field().is_some());

        let mut p = parser("@pointorigin");
        assert_eq!(p.field(), None);
        assert_eq!(p.checkpoint(), 0);
    }

    #[test]
    fn test_field_declines_postfix_array() {
        let mut p = parser("uint32 x[4]");
        assert_eq!(p.field(), None);
        assert_eq!(p.checkpoint(), 0);
    }

    #[test]
    fn test_attribute_lists() {
        let field = parser("uint8 a !deprecated").field().unwrap();
        assert_eq!(field.attributes, Some(vec![Attribute::Deprecated]));

        let field = parser("uint8 a!deprecated!deprecated").field().unwrap();
        assert_eq!(
            field.attributes,
            Some(vec![Attribute::Deprecated, Attribute::Deprecated])
        );
    }

    #[test]
    fn test_unknown_attribute_is_left_unconsumed() {
        let mut p = parser("uint8 a !obsolete");
        let field = p.field().unwrap();

        assert_eq!(field.attributes, None);
        assert_eq!(p.rest(), " !obsolete");
    }

    #[test]
    fn test_array_prefix_and_postfix_forms_agree() {
        let prefix = parser("@item[*] items !deprecated").array().unwrap();
        let postfix = parser("@item items[*] !deprecated").array().unwrap();

        let expected = Array::new(TypeRef::user("item"), ArraySize::Dynamic, "items")
            .with_attribute(Attribute::Deprecated);
        assert_eq!(prefix, expected);
        assert_eq!(postfix, expected);
    }

    #[test]
    fn test_array_requires_a_size() {
        let mut p = parser("uint8 values");
        assert_eq!(p.array(), None);
        assert_eq!(p.checkpoint(), 0);
    }

    #[test]
    fn test_id_declaration() {
        assert_eq!(parser("id 0x1F").id_declaration().unwrap().value, "0x1F");
        assert_eq!(parser("id 0x").id_declaration(), None);
        assert_eq!(parser("id 12").id_declaration(), None);
        assert_eq!(parser("id0x01").id_declaration(), None);
    }
}
