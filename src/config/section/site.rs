//! `[site]` configuration.
//!
//! Site metadata injected into the HTML shell and reused by the feed and
//! sitemap generators.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Site title.
    pub title: String,

    /// Site description (meta description, feed subtitle).
    pub description: String,

    /// Canonical site URL (e.g., "https://v8.dev").
    pub url: Option<String>,

    /// Author name for feed entries without an explicit author.
    pub author: String,

    /// Contact email used in feed author entries.
    pub email: String,

    /// Language code (e.g., "en").
    pub language: String,

    /// Analytics property ID baked into the bundled script. Omit to disable.
    pub analytics: Option<String>,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            url: None,
            author: String::new(),
            email: String::new(),
            language: "en".into(),
            analytics: None,
        }
    }
}

/// Field paths for diagnostics.
pub struct SiteSectionFields {
    pub title: FieldPath,
    pub description: FieldPath,
    pub url: FieldPath,
    pub author: FieldPath,
    pub email: FieldPath,
    pub language: FieldPath,
    pub analytics: FieldPath,
}

impl SiteSection {
    pub const FIELDS: SiteSectionFields = SiteSectionFields {
        title: FieldPath::new("site.title"),
        description: FieldPath::new("site.description"),
        url: FieldPath::new("site.url"),
        author: FieldPath::new("site.author"),
        email: FieldPath::new("site.email"),
        language: FieldPath::new("site.language"),
        analytics: FieldPath::new("site.analytics"),
    };

    /// Base URL with any trailing slash removed, for joining with `UrlPath`.
    pub fn base_url(&self) -> Option<&str> {
        self.url.as_deref().map(|u| u.trim_end_matches('/'))
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `title` must be set
    /// - If a feed or sitemap is enabled, `url` must be set
    /// - `url` must be a valid http(s) URL with a host
    pub fn validate(
        &self,
        feed_enabled: bool,
        sitemap_enabled: bool,
        diag: &mut ConfigDiagnostics,
    ) {
        if self.title.is_empty() {
            diag.error(Self::FIELDS.title, "required");
        }

        // Feed and sitemap entries need absolute URLs
        if (feed_enabled || sitemap_enabled) && self.url.is_none() {
            diag.error_with_hint(
                Self::FIELDS.url,
                "feed or sitemap generation is enabled but the site URL is not configured",
                format!("set {}, e.g.: \"https://v8.dev\"", Self::FIELDS.url),
            );
        }

        // URL format check using url crate for strict validation
        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    // Must be http or https
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://v8.dev",
                        );
                    }
                    // Must have a valid host
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            "URL must have a valid host",
                            "use format like https://v8.dev",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!("invalid URL: {}", e),
                        "use format like https://v8.dev",
                    );
                }
            }
        }
    }
}
