//! JSON output of the syntax tree.

use crate::error::{LudError, Result};
use crate::types::Document;

/// Compact JSON, one document per line.
pub fn render_json(doc: &Document) -> Result<String> {
    serde_json::to_string(doc).map_err(json_error)
}

/// Indented JSON for terminals.
pub fn render_json_pretty(doc: &Document) -> Result<String> {
    serde_json::to_string_pretty(doc).map_err(json_error)
}

fn json_error(e: serde_json::Error) -> LudError {
    LudError::Render {
        message: format!("Failed to serialize document: {}", e),
    }
}
