//! ludwieg - Ludwieg package definition parser
//!
//! Parses Ludwieg IDL documents (packages of identifiers, typed fields,
//! arrays and nested structs) into a serializable syntax tree, and renders
//! that tree back as source text, a tree view or JSON.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;

pub use discovery::{discover, discover_paths, DiscoveryResult, Manifest};
pub use error::{LudError, Result};
pub use parser::{
    parse_document, parse_document_with, ParseOptions, SyntaxError, SyntaxErrorKind, DEFAULT_MAX_DEPTH,
};
pub use render::{render_json, render_json_pretty, render_source, render_tree};
pub use types::{
    Array, ArraySize, Attribute, Document, Field, FieldRef, IdDeclaration, NativeType, Package,
    PackageMember, Struct, StructMember, TypeRef, TypeSource,
};
