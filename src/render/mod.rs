//! Rendering parsed documents for people and tools.
//!
//! - `source` - canonical definition text
//! - `tree` - the box-drawing outline shown by `ludwieg show`
//! - `json` - the syntax tree as JSON

mod json;
mod source;
mod tree;

pub use json::{render_json, render_json_pretty};
pub use source::{render_package, render_source};
pub use tree::{package_node, render_tree, TreeNode};
