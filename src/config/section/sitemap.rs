//! `[build.sitemap]` section configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapSection {
    /// Generate sitemap.xml.
    pub enable: bool,

    /// Output filename relative to the output root.
    pub path: String,
}

impl Default for SitemapSection {
    fn default() -> Self {
        Self {
            enable: true,
            path: "sitemap.xml".into(),
        }
    }
}

/// Field paths for diagnostics.
pub struct SitemapSectionFields {
    pub enable: FieldPath,
    pub path: FieldPath,
}

impl SitemapSection {
    pub const FIELDS: SitemapSectionFields = SitemapSectionFields {
        enable: FieldPath::new("build.sitemap.enable"),
        path: FieldPath::new("build.sitemap.path"),
    };

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.enable {
            return;
        }

        if self.path.is_empty() {
            diag.error(Self::FIELDS.path, "required when sitemap is enabled");
            return;
        }

        let path = Path::new(&self.path);
        if path.is_absolute() || path.components().count() > 1 {
            diag.error_with_hint(
                Self::FIELDS.path,
                format!("'{}' must be a plain filename", self.path),
                "the sitemap is written to the output root, e.g. \"sitemap.xml\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let sitemap = SitemapSection::default();
        assert!(sitemap.enable);
        assert_eq!(sitemap.path, "sitemap.xml");
    }

    #[test]
    fn test_validate_rejects_absolute_path() {
        let sitemap = SitemapSection {
            path: "/var/sitemap.xml".into(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        sitemap.validate(&mut diag);
        assert!(diag.has_errors());
    }
}
