//! `[build.feed]` section configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Feed output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedFormat {
    Atom,
    Rss,
}

impl FeedFormat {
    /// MIME type for `<link rel="alternate">`.
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Atom => "application/atom+xml",
            Self::Rss => "application/rss+xml",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedSection {
    /// Generate a feed for blog posts.
    pub enable: bool,

    /// Output filename relative to the output root.
    pub path: String,

    /// Feed format (atom or rss).
    pub format: FeedFormat,
}

impl Default for FeedSection {
    fn default() -> Self {
        Self {
            enable: true,
            path: "blog.atom".into(),
            format: FeedFormat::Atom,
        }
    }
}

/// Field paths for diagnostics.
pub struct FeedSectionFields {
    pub enable: FieldPath,
    pub path: FieldPath,
    pub format: FieldPath,
}

impl FeedSection {
    pub const FIELDS: FeedSectionFields = FeedSectionFields {
        enable: FieldPath::new("build.feed.enable"),
        path: FieldPath::new("build.feed.path"),
        format: FieldPath::new("build.feed.format"),
    };

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.enable {
            return;
        }

        if self.path.is_empty() {
            diag.error(Self::FIELDS.path, "required when feed is enabled");
            return;
        }

        let path = Path::new(&self.path);
        if path.is_absolute() || path.components().count() > 1 {
            diag.error_with_hint(
                Self::FIELDS.path,
                format!("'{}' must be a plain filename", self.path),
                "the feed is written to the output root, e.g. \"blog.atom\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let feed = FeedSection::default();
        assert!(feed.enable);
        assert_eq!(feed.path, "blog.atom");
        assert_eq!(feed.format, FeedFormat::Atom);
    }

    #[test]
    fn test_format_parses_lowercase() {
        let feed: FeedSection = toml::from_str("format = \"rss\"").unwrap();
        assert_eq!(feed.format, FeedFormat::Rss);
    }

    #[test]
    fn test_validate_rejects_nested_path() {
        let feed = FeedSection {
            path: "feeds/blog.atom".into(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        feed.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_validate_disabled_skips_checks() {
        let feed = FeedSection {
            enable: false,
            path: String::new(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        feed.validate(&mut diag);
        assert!(!diag.has_errors());
    }
}
