//! Tree view of a document, as printed by `ludwieg show`.
//!
//! ```text
//! user (0x01)
//! ├── Fields
//! │   ├── [0] string name
//! │   └── [1] @tag[*] tags [Deprecated]
//! └── Structures
//!     └── tag
//!         └── Fields
//!             └── [0] uint8 value
//! ```

use crate::types::{Attribute, Document, FieldRef, Package, Struct};

/// A labelled node with ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub label: String,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn branch(label: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            label: label.into(),
            children,
        }
    }

    /// Render with box-drawing connectors, one node per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.label);
        out.push('\n');
        self.render_children(&mut out, "");
        out
    }

    fn render_children(&self, out: &mut String, prefix: &str) {
        let count = self.children.len();
        for (i, child) in self.children.iter().enumerate() {
            let last = i + 1 == count;
            out.push_str(prefix);
            out.push_str(if last { "└── " } else { "├── " });
            out.push_str(&child.label);
            out.push('\n');

            let child_prefix = format!("{}{}", prefix, if last { "    " } else { "│   " });
            child.render_children(out, &child_prefix);
        }
    }
}

/// Render every package as a tree, separated by blank lines.
pub fn render_tree(doc: &Document) -> String {
    doc.packages
        .iter()
        .map(|package| package_node(package).render())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the tree for one package.
pub fn package_node(package: &Package) -> TreeNode {
    let label = match package.identifier() {
        Some(id) => format!("{} ({})", package.name, id),
        None => package.name.clone(),
    };

    let mut children = member_groups(package.fields(), package.structs());
    if children.is_empty() {
        children.push(TreeNode::leaf("(Empty Package)"));
    }
    TreeNode::branch(label, children)
}

fn struct_node(s: &Struct) -> TreeNode {
    let mut children = member_groups(s.fields(), s.structs());
    if children.is_empty() {
        children.push(TreeNode::leaf("(Empty Struct)"));
    }
    TreeNode::branch(s.name.clone(), children)
}

fn member_groups<'a>(
    fields: impl Iterator<Item = FieldRef<'a>>,
    structs: impl Iterator<Item = &'a Struct>,
) -> Vec<TreeNode> {
    let mut groups = Vec::new();

    let fields: Vec<TreeNode> = fields
        .enumerate()
        .map(|(i, field)| TreeNode::leaf(field_label(i, field)))
        .collect();
    if !fields.is_empty() {
        groups.push(TreeNode::branch("Fields", fields));
    }

    let structs: Vec<TreeNode> = structs.map(struct_node).collect();
    if !structs.is_empty() {
        groups.push(TreeNode::branch("Structures", structs));
    }

    groups
}

fn field_label(index: usize, field: FieldRef<'_>) -> String {
    let (declaration, deprecated) = match field {
        FieldRef::Field(f) => (
            format!("{} {}", f.ty, f.name),
            f.has_attribute(Attribute::Deprecated),
        ),
        FieldRef::Array(a) => (
            format!("{}{} {}", a.ty, a.size, a.name),
            a.has_attribute(Attribute::Deprecated),
        ),
    };

    if deprecated {
        format!("[{}] {} [Deprecated]", index, declaration)
    } else {
        format!("[{}] {}", index, declaration)
    }
}
