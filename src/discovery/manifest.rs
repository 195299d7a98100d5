//! Project manifest (ludwieg.yaml) parsing.
//!
//! The manifest tells the CLI where definition files live and how to
//! parse them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LudError, Result};
use crate::parser::{ParseOptions, DEFAULT_MAX_DEPTH};

/// Project manifest loaded from ludwieg.yaml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Directories to scan for `.lud` files.
    /// Defaults to the manifest's directory if empty.
    pub sources: Vec<String>,

    /// Patterns to exclude from discovery.
    pub excludes: Vec<String>,

    /// Maximum struct nesting depth (`DEFAULT_MAX_DEPTH` when absent).
    pub max_depth: Option<usize>,
}

impl Manifest {
    /// Load manifest from a ludwieg.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| LudError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| LudError::Config {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check ludwieg.yaml syntax".to_string()),
        })
    }

    /// Parser options derived from the manifest.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            max_depth: self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
        }
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        self.excludes
            .iter()
            .any(|pattern| Self::matches_pattern(&path_str, pattern))
    }

    /// Simple glob pattern matching.
    fn matches_pattern(path: &str, pattern: &str) -> bool {
        if let Some(suffix) = pattern.strip_prefix("**/") {
            // **/dir/* matches anything inside dir anywhere in the path
            if let Some(dir) = suffix.strip_suffix("/*") {
                return path.contains(&format!("/{}/", dir))
                    || path.starts_with(&format!("{}/", dir));
            }
            return path.contains(suffix);
        }

        if pattern.starts_with('*') && !pattern.contains('/') {
            return path.ends_with(&pattern[1..]);
        }

        if let Some(prefix) = pattern.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", prefix))
                || path.contains(&format!("/{}/", prefix));
        }

        path.contains(pattern)
    }

    /// Get effective source paths, defaulting to the current directory.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
sources:
  - schemas/
  - legacy/
excludes:
  - "*.bak.lud"
  - "**/drafts/*"
max_depth: 8
"#;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.sources, vec!["schemas/", "legacy/"]);
        assert_eq!(manifest.excludes, vec!["*.bak.lud", "**/drafts/*"]);
        assert_eq!(manifest.max_depth, Some(8));
        assert_eq!(manifest.parse_options().max_depth, 8);
    }

    #[test]
    fn test_parse_empty_manifest() {
        let manifest = Manifest::parse("").unwrap();

        assert_eq!(manifest, Manifest::default());
        assert_eq!(manifest.parse_options(), ParseOptions::default());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let manifest = Manifest::parse("output: gen\nmax_depth: 2\n").unwrap();
        assert_eq!(manifest.max_depth, Some(2));
    }

    #[test]
    fn test_invalid_manifest() {
        let result = Manifest::parse("max_depth: deep\n");
        assert!(matches!(result, Err(LudError::Config { .. })));
    }

    #[test]
    fn test_effective_sources() {
        let mut manifest = Manifest::default();
        assert_eq!(manifest.effective_sources(), vec!["."]);

        manifest.sources = vec!["schemas/".to_string()];
        assert_eq!(manifest.effective_sources(), vec!["schemas/"]);
    }

    #[test]
    fn test_is_excluded_extension() {
        let manifest = Manifest {
            excludes: vec!["*.bak.lud".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("user.bak.lud")));
        assert!(manifest.is_excluded(Path::new("path/to/user.bak.lud")));
        assert!(!manifest.is_excluded(Path::new("user.lud")));
    }

    #[test]
    fn test_is_excluded_directory() {
        let manifest = Manifest {
            excludes: vec!["**/drafts/*".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("drafts/foo.lud")));
        assert!(manifest.is_excluded(Path::new("schemas/drafts/bar.lud")));
        assert!(!manifest.is_excluded(Path::new("schemas/user.lud")));
    }

    #[test]
    fn test_is_excluded_exact() {
        let manifest = Manifest {
            excludes: vec!["vendor".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("vendor")));
        assert!(manifest.is_excluded(Path::new("path/vendor/file.lud")));
    }
}
