//! Field and array declarations.

use std::fmt;

use serde::{Serialize, Serializer};

use super::type_ref::TypeRef;

/// A flag attached to a field or array with `!flag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    /// The field is kept on the wire but hidden from generated APIs.
    Deprecated,
}

impl Attribute {
    /// All recognised attributes.
    pub const ALL: [Attribute; 1] = [Attribute::Deprecated];

    pub fn keyword(self) -> &'static str {
        match self {
            Attribute::Deprecated => "deprecated",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "!{}", self.keyword())
    }
}

/// Size of an array declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArraySize {
    /// `[*]`: any number of elements
    Dynamic,
    /// `[N]`: the literal digits, which may be empty for `[]`
    Fixed(String),
}

impl ArraySize {
    pub fn fixed(digits: impl Into<String>) -> Self {
        ArraySize::Fixed(digits.into())
    }

    /// The text between the brackets.
    pub fn as_str(&self) -> &str {
        match self {
            ArraySize::Dynamic => "*",
            ArraySize::Fixed(digits) => digits,
        }
    }

    /// Whether the size was written as `[]`.
    pub fn is_unspecified(&self) -> bool {
        matches!(self, ArraySize::Fixed(digits) if digits.is_empty())
    }
}

impl fmt::Display for ArraySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.as_str())
    }
}

impl Serialize for ArraySize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A single-value field: `uint8 count !deprecated`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    #[serde(rename = "type")]
    pub ty: TypeRef,
    pub name: String,
    /// `None` when no attribute list was written.
    pub attributes: Option<Vec<Attribute>>,
}

impl Field {
    pub fn new(ty: impl Into<TypeRef>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
            attributes: None,
        }
    }

    /// Add an attribute, creating the attribute list if needed.
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.get_or_insert_with(Vec::new).push(attribute);
        self
    }

    pub fn has_attribute(&self, attribute: Attribute) -> bool {
        has_attribute(&self.attributes, attribute)
    }
}

/// An array field: `uint32[4] values` or `@item[*] items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Array {
    #[serde(rename = "type")]
    pub ty: TypeRef,
    pub size: ArraySize,
    pub name: String,
    pub attributes: Option<Vec<Attribute>>,
}

impl Array {
    pub fn new(ty: impl Into<TypeRef>, size: ArraySize, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            size,
            name: name.into(),
            attributes: None,
        }
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.get_or_insert_with(Vec::new).push(attribute);
        self
    }

    pub fn has_attribute(&self, attribute: Attribute) -> bool {
        has_attribute(&self.attributes, attribute)
    }
}

fn has_attribute(attributes: &Option<Vec<Attribute>>, attribute: Attribute) -> bool {
    attributes
        .as_deref()
        .is_some_and(|list| list.contains(&attribute))
}
