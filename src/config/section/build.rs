//! `[build]` section configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::section::{AssetsSection, FeedSection, SitemapSection};
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::path::normalize_path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    /// Content directory holding markdown sources and assets.
    pub content: PathBuf,

    /// Output directory for the generated site.
    pub output: PathBuf,

    /// Minify emitted HTML-adjacent artifacts (sitemap, bundled JS/CSS).
    pub minify: bool,

    /// Render single newlines in Markdown as `<br>`.
    pub breaks: bool,

    /// Static asset copying.
    pub assets: AssetsSection,

    /// Feed generation.
    pub feed: FeedSection,

    /// Sitemap generation.
    pub sitemap: SitemapSection,

    /// Remove the output directory before building (CLI only).
    #[serde(skip)]
    pub clean: bool,

    /// Include draft pages in the build (CLI only).
    #[serde(skip)]
    pub drafts: bool,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            content: "src".into(),
            output: "dist".into(),
            minify: true,
            breaks: true,
            assets: AssetsSection::default(),
            feed: FeedSection::default(),
            sitemap: SitemapSection::default(),
            clean: false,
            drafts: false,
        }
    }
}

/// Field paths for diagnostics.
pub struct BuildSectionFields {
    pub content: FieldPath,
    pub output: FieldPath,
    pub minify: FieldPath,
    pub breaks: FieldPath,
}

impl BuildSection {
    pub const FIELDS: BuildSectionFields = BuildSectionFields {
        content: FieldPath::new("build.content"),
        output: FieldPath::new("build.output"),
        minify: FieldPath::new("build.minify"),
        breaks: FieldPath::new("build.breaks"),
    };

    /// Resolve content/output against the project root.
    pub fn normalize(&mut self, root: &Path) {
        self.content = normalize_path(&root.join(&self.content));
        self.output = normalize_path(&root.join(&self.output));
    }

    /// Validate build configuration (after normalization).
    ///
    /// # Checks
    /// - content directory must exist
    /// - output must not be the content directory or a parent of it
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.content.is_dir() {
            diag.error_with_hint(
                Self::FIELDS.content,
                format!("content directory '{}' not found", self.content.display()),
                "the path is resolved relative to the config file",
            );
        }

        if self.content.starts_with(&self.output) {
            diag.error(
                Self::FIELDS.output,
                format!(
                    "output directory '{}' would overwrite the content directory",
                    self.output.display()
                ),
            );
        }

        self.assets.validate(diag);
        self.feed.validate(diag);
        self.sitemap.validate(diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let build = BuildSection::default();
        assert_eq!(build.content, PathBuf::from("src"));
        assert_eq!(build.output, PathBuf::from("dist"));
        assert!(build.minify);
        assert!(build.breaks);
        assert!(!build.clean);
        assert!(!build.drafts);
    }

    #[test]
    fn test_normalize_resolves_against_root() {
        let mut build = BuildSection::default();
        build.normalize(Path::new("/site"));
        assert_eq!(build.content, PathBuf::from("/site/src"));
        assert_eq!(build.output, PathBuf::from("/site/dist"));
    }

    #[test]
    fn test_validate_missing_content_dir() {
        let mut build = BuildSection::default();
        build.normalize(Path::new("/nonexistent-root"));
        let mut diag = ConfigDiagnostics::new();
        build.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_validate_output_cannot_contain_content() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("dist/src")).unwrap();

        let mut build = BuildSection {
            content: "dist/src".into(),
            output: "dist".into(),
            ..Default::default()
        };
        build.normalize(dir.path());

        let mut diag = ConfigDiagnostics::new();
        build.validate(&mut diag);
        assert!(diag.has_errors());
    }
}
