//! Packages, structs and the document that holds them.

use serde::Serialize;

use super::field::{Array, Field};

/// The result of a successful parse: every package, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Document {
    pub packages: Vec<Package>,
}

impl Document {
    pub fn new(packages: Vec<Package>) -> Self {
        Self { packages }
    }

    /// Find a package by name.
    pub fn package(&self, name: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.name == name)
    }
}

/// `id 0x01`: the package identifier, kept verbatim including `0x`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdDeclaration {
    pub value: String,
}

impl IdDeclaration {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// A top-level `package name { ... }` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Package {
    pub name: String,
    pub contents: Vec<PackageMember>,
}

/// A declaration directly inside a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "object_type", rename_all = "lowercase")]
pub enum PackageMember {
    #[serde(rename = "identifier")]
    Id(IdDeclaration),
    Field(Field),
    Array(Array),
    Struct(Struct),
}

impl Package {
    pub fn new(name: impl Into<String>, contents: Vec<PackageMember>) -> Self {
        Self {
            name: name.into(),
            contents,
        }
    }

    /// The first identifier declared in the package, if any.
    pub fn identifier(&self) -> Option<&str> {
        self.contents.iter().find_map(|member| match member {
            PackageMember::Id(id) => Some(id.value.as_str()),
            _ => None,
        })
    }

    /// Fields and arrays, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = FieldRef<'_>> {
        self.contents.iter().filter_map(|member| match member {
            PackageMember::Field(field) => Some(FieldRef::Field(field)),
            PackageMember::Array(array) => Some(FieldRef::Array(array)),
            _ => None,
        })
    }

    pub fn structs(&self) -> impl Iterator<Item = &Struct> {
        self.contents.iter().filter_map(|member| match member {
            PackageMember::Struct(s) => Some(s),
            _ => None,
        })
    }
}

/// A `struct name { ... }` block, inside a package or another struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Struct {
    pub name: String,
    pub contents: Vec<StructMember>,
}

/// A declaration inside a struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "object_type", rename_all = "lowercase")]
pub enum StructMember {
    Field(Field),
    Array(Array),
    Struct(Struct),
}

impl Struct {
    pub fn new(name: impl Into<String>, contents: Vec<StructMember>) -> Self {
        Self {
            name: name.into(),
            contents,
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldRef<'_>> {
        self.contents.iter().filter_map(|member| match member {
            StructMember::Field(field) => Some(FieldRef::Field(field)),
            StructMember::Array(array) => Some(FieldRef::Array(array)),
            StructMember::Struct(_) => None,
        })
    }

    pub fn structs(&self) -> impl Iterator<Item = &Struct> {
        self.contents.iter().filter_map(|member| match member {
            StructMember::Struct(s) => Some(s),
            _ => None,
        })
    }
}

/// Borrowed view over either kind of field declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRef<'a> {
    Field(&'a Field),
    Array(&'a Array),
}

impl<'a> FieldRef<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            FieldRef::Field(field) => &field.name,
            FieldRef::Array(array) => &array.name,
        }
    }
}

impl From<Field> for PackageMember {
    fn from(field: Field) -> Self {
        PackageMember::Field(field)
    }
}

impl From<Array> for PackageMember {
    fn from(array: Array) -> Self {
        PackageMember::Array(array)
    }
}

impl From<Struct> for PackageMember {
    fn from(s: Struct) -> Self {
        PackageMember::Struct(s)
    }
}

impl From<IdDeclaration> for PackageMember {
    fn from(id: IdDeclaration) -> Self {
        PackageMember::Id(id)
    }
}

impl From<Field> for StructMember {
    fn from(field: Field) -> Self {
        StructMember::Field(field)
    }
}

impl From<Array> for StructMember {
    fn from(array: Array) -> Self {
        StructMember::Array(array)
    }
}

impl From<Struct> for StructMember {
    fn from(s: Struct) -> Self {
        StructMember::Struct(s)
    }
}
