//! `[build.assets]` section configuration.
//!
//! Static asset copying with two modes:
//! - **passthrough**: directories copied with structure preserved
//!   (`_img/` → `dist/_img/`)
//! - **flatten**: individual files copied to the output root
//!   (`favicon.ico` → `dist/favicon.ico`)
//!
//! All entries are relative to the content root.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsSection {
    /// Directories copied to the output with their path preserved.
    /// Files inside are referenced as `/{dir}/path/to/file`.
    pub passthrough: Vec<PathBuf>,

    /// Files copied directly to the output root.
    pub flatten: Vec<PathBuf>,
}

impl Default for AssetsSection {
    fn default() -> Self {
        Self {
            passthrough: vec!["_img".into(), "_css".into()],
            flatten: vec!["favicon.ico".into(), "robots.txt".into()],
        }
    }
}

/// Field paths for diagnostics.
pub struct AssetsSectionFields {
    pub passthrough: FieldPath,
    pub flatten: FieldPath,
}

impl AssetsSection {
    pub const FIELDS: AssetsSectionFields = AssetsSectionFields {
        passthrough: FieldPath::new("build.assets.passthrough"),
        flatten: FieldPath::new("build.assets.flatten"),
    };

    /// Check if a content-relative path belongs to an asset entry.
    ///
    /// Used by the content scanner to exclude asset files from the page set.
    pub fn contains(&self, rel: &Path) -> bool {
        self.passthrough.iter().any(|dir| rel.starts_with(dir))
            || self.flatten.iter().any(|file| rel == file)
    }

    /// Validate asset paths (must stay inside the content root).
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let entries = self
            .passthrough
            .iter()
            .map(|p| (p, Self::FIELDS.passthrough))
            .chain(self.flatten.iter().map(|p| (p, Self::FIELDS.flatten)));

        for (path, field) in entries {
            Self::validate_path_safety(path, field, diag);
        }
    }

    /// Check a single path for unsafe components (`..` or absolute).
    fn validate_path_safety(path: &Path, field: FieldPath, diag: &mut ConfigDiagnostics) {
        use std::path::Component;

        for comp in path.components() {
            let msg = match comp {
                Component::ParentDir => Some("parent directory '..' not allowed"),
                Component::Prefix(_) | Component::RootDir => Some("absolute paths not allowed"),
                _ => None,
            };
            if let Some(reason) = msg {
                diag.error(field, format!("path '{}': {reason}", path.display()));
            }
        }
    }
}
