//! Canonical source printer.
//!
//! Emits a document back as definition text: four-space indentation, one
//! declaration per line, arrays in `type[size] name` form. Parsing the output
//! yields a document equal to the input.

use crate::types::{
    Array, Attribute, Document, Field, Package, PackageMember, Struct, StructMember,
};

const INDENT: &str = "    ";

/// Placeholder line keeping an empty block parseable.
const EMPTY_BODY: &str = "// empty";

/// Render a whole document.
pub fn render_source(doc: &Document) -> String {
    let mut writer = SourceWriter::default();
    for (i, package) in doc.packages.iter().enumerate() {
        if i > 0 {
            writer.blank();
        }
        writer.package(package);
    }
    writer.out
}

/// Render a single package.
pub fn render_package(package: &Package) -> String {
    let mut writer = SourceWriter::default();
    writer.package(package);
    writer.out
}

#[derive(Default)]
struct SourceWriter {
    out: String,
    depth: usize,
}

impl SourceWriter {
    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn package(&mut self, package: &Package) {
        self.line(&format!("package {} {{", package.name));
        self.depth += 1;
        if package.contents.is_empty() {
            self.line(EMPTY_BODY);
        }
        for member in &package.contents {
            match member {
                PackageMember::Id(id) => self.line(&format!("id {}", id.value)),
                PackageMember::Field(field) => self.line(&field_line(field)),
                PackageMember::Array(array) => self.line(&array_line(array)),
                PackageMember::Struct(s) => self.structure(s),
            }
        }
        self.depth -= 1;
        self.line("}");
    }

    fn structure(&mut self, s: &Struct) {
        self.line(&format!("struct {} {{", s.name));
        self.depth += 1;
        if s.contents.is_empty() {
            self.line(EMPTY_BODY);
        }
        for member in &s.contents {
            match member {
                StructMember::Field(field) => self.line(&field_line(field)),
                StructMember::Array(array) => self.line(&array_line(array)),
                StructMember::Struct(inner) => self.structure(inner),
            }
        }
        self.depth -= 1;
        self.line("}");
    }
}

fn field_line(field: &Field) -> String {
    format!(
        "{} {}{}",
        field.ty,
        field.name,
        attribute_suffix(&field.attributes)
    )
}

fn array_line(array: &Array) -> String {
    format!(
        "{}{} {}{}",
        array.ty,
        array.size,
        array.name,
        attribute_suffix(&array.attributes)
    )
}

fn attribute_suffix(attributes: &Option<Vec<Attribute>>) -> String {
    attributes
        .iter()
        .flatten()
        .map(|attribute| format!(" {}", attribute))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;
    use crate::types::{ArraySize, IdDeclaration, NativeType, TypeRef};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_package() {
        let package = Package::new(
            "user",
            vec![
                IdDeclaration::new("0x01").into(),
                Field::new(NativeType::String, "name").into(),
                Array::new(TypeRef::user("tag"), ArraySize::Dynamic, "tags")
                    .with_attribute(Attribute::Deprecated)
                    .into(),
                Struct::new("tag", vec![Field::new(NativeType::Uint8, "value").into()]).into(),
            ],
        );

        assert_eq!(
            render_package(&package),
            "package user {\n    id 0x01\n    string name\n    @tag[*] tags !deprecated\n    struct tag {\n        uint8 value\n    }\n}\n"
        );
    }

    #[test]
    fn test_empty_struct_gets_placeholder() {
        let package = Package::new("p", vec![Struct::new("s", vec![]).into()]);
        let text = render_package(&package);

        assert!(text.contains("struct s {\n        // empty\n    }"));
        assert_eq!(parse_document(&text).unwrap().packages[0], package);
    }

    #[test]
    fn test_round_trip_is_stable() {
        let source = "// users\npackage user {\n  id 0xA1\n  uint32 ids[16]\n  @point origin!deprecated\n  struct point { double x double y }\n  uint8[] raw\n}\npackage other { id 0x02 }\n";

        let doc = parse_document(source).unwrap();
        let printed = render_source(&doc);

        assert_eq!(parse_document(&printed).unwrap(), doc);
        assert_eq!(render_source(&parse_document(&printed).unwrap()), printed);
    }
}
