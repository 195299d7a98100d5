//! The syntax tree produced by the parser.
//!
//! - `Document` - every package in a source buffer
//! - `Package` / `Struct` - named blocks and their ordered members
//! - `Field` / `Array` - declarations with a `TypeRef` and attributes
//! - `NativeType` - the built-in type keywords

mod field;
mod package;
mod type_ref;

pub use field::{Array, ArraySize, Attribute, Field};
pub use package::{Document, FieldRef, IdDeclaration, Package, PackageMember, Struct, StructMember};
pub use type_ref::{NativeType, TypeRef, TypeSource};
