//! Type references used by fields and arrays.
//!
//! A declaration's type is either one of the built-in native keywords or a
//! reference (`@name`) to a struct declared somewhere in the same document.

use std::fmt;

use serde::Serialize;

/// Built-in scalar and collection types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NativeType {
    /// Integer whose encoded width depends on its value
    DynInt,
    Uint8,
    Uint32,
    Uint64,
    /// Alias of `uint8`
    Byte,
    /// IEEE-754 64-bit float
    Double,
    /// UTF-8 string
    String,
    /// Binary large object
    Blob,
    Bool,
    Uuid,
    Array,
    /// Any value; maps to the target language's generic object type
    Any,
}

impl NativeType {
    /// All native types, in the order the parser tries them.
    pub const ALL: [NativeType; 12] = [
        NativeType::DynInt,
        NativeType::Uint8,
        NativeType::Uint32,
        NativeType::Uint64,
        NativeType::Byte,
        NativeType::Double,
        NativeType::String,
        NativeType::Blob,
        NativeType::Bool,
        NativeType::Uuid,
        NativeType::Array,
        NativeType::Any,
    ];

    /// The keyword spelling this type in source.
    pub fn keyword(self) -> &'static str {
        match self {
            NativeType::DynInt => "dynint",
            NativeType::Uint8 => "uint8",
            NativeType::Uint32 => "uint32",
            NativeType::Uint64 => "uint64",
            NativeType::Byte => "byte",
            NativeType::Double => "double",
            NativeType::String => "string",
            NativeType::Blob => "blob",
            NativeType::Bool => "bool",
            NativeType::Uuid => "uuid",
            NativeType::Array => "array",
            NativeType::Any => "any",
        }
    }

    /// Look up a native type by its exact keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.keyword() == keyword)
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Where a referenced type comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeSource {
    Native,
    User,
}

impl fmt::Display for TypeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSource::Native => write!(f, "native"),
            TypeSource::User => write!(f, "user"),
        }
    }
}

/// The type of a field or array.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "source", content = "kind", rename_all = "lowercase")]
pub enum TypeRef {
    /// `uint8`, `string`, ...
    Native(NativeType),
    /// `@name`, naming a user struct
    User(String),
}

impl TypeRef {
    pub fn user(name: impl Into<String>) -> Self {
        TypeRef::User(name.into())
    }

    pub fn source(&self) -> TypeSource {
        match self {
            TypeRef::Native(_) => TypeSource::Native,
            TypeRef::User(_) => TypeSource::User,
        }
    }

    /// The native keyword or the referenced struct name, without `@`.
    pub fn name(&self) -> &str {
        match self {
            TypeRef::Native(native) => native.keyword(),
            TypeRef::User(name) => name,
        }
    }
}

impl From<NativeType> for TypeRef {
    fn from(native: NativeType) -> Self {
        TypeRef::Native(native)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Native(native) => write!(f, "{}", native),
            TypeRef::User(name) => write!(f, "@{}", name),
        }
    }
}
