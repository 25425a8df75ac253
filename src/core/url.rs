//! URL path type for type-safe URL handling.
//!
//! - Internal representation: Always decoded (human-readable)
//! - Output boundary (feeds, sitemap): encode via `to_encoded`

use std::borrow::Borrow;
use std::path::{Component, Path};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Decoded URL path (internal representation)
///
/// Invariants:
/// - Always decoded (no percent-encoding)
/// - Always starts with `/`
/// - Page URLs end with `/`, asset URLs may not
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UrlPath(Arc<str>);

impl UrlPath {
    /// Derive the pretty URL for a content source file.
    ///
    /// The path is relative to the content root; the extension is dropped
    /// and `index` files map to their directory:
    /// - `index.md` -> `/`
    /// - `docs/index.md` -> `/docs/`
    /// - `blog/dataview.md` -> `/blog/dataview/`
    pub fn from_content_path(rel: &Path) -> Self {
        let mut segments: Vec<&str> = rel
            .components()
            .filter_map(|c| match c {
                Component::Normal(os) => os.to_str(),
                _ => None,
            })
            .collect();

        if let Some(last) = segments.pop() {
            let stem = last.rsplit_once('.').map_or(last, |(stem, _)| stem);
            if stem != "index" {
                segments.push(stem);
            }
        }

        if segments.is_empty() {
            return Self(Arc::from("/"));
        }

        let mut url = String::with_capacity(rel.as_os_str().len() + 2);
        for segment in &segments {
            url.push('/');
            url.push_str(segment);
        }
        url.push('/');
        Self(Arc::from(url))
    }

    /// Create page URL (with trailing slash). Normalizes leading/trailing slashes.
    /// Strips query string and fragment.
    pub fn from_page(decoded: &str) -> Self {
        let trimmed = decoded.trim();

        // Handle root path specially
        if trimmed.is_empty() || trimmed == "/" {
            return Self(Arc::from("/"));
        }

        // Use url crate to properly strip query and fragment
        let path = Self::strip_query_fragment(trimmed);

        // Add leading slash if missing
        let with_leading = if path.starts_with('/') {
            path
        } else {
            format!("/{}", path)
        };

        // Add trailing slash if missing (for page URLs)
        let normalized = if with_leading.ends_with('/') {
            with_leading
        } else {
            format!("{}/", with_leading)
        };

        Self(Arc::from(normalized))
    }

    /// Strip query string and fragment from a path using url crate.
    fn strip_query_fragment(path: &str) -> String {
        use percent_encoding::percent_decode_str;

        // Use a dummy base URL to parse the path
        static BASE: std::sync::OnceLock<url::Url> = std::sync::OnceLock::new();
        let base = BASE.get_or_init(|| url::Url::parse("http://x").unwrap());

        match base.join(path) {
            Ok(parsed) => {
                // url crate returns percent-encoded path, decode it
                percent_decode_str(parsed.path())
                    .decode_utf8()
                    .map(|s| s.into_owned())
                    .unwrap_or_else(|_| parsed.path().to_string())
            }
            // Fallback to simple split if url parsing fails
            Err(_) => path.split(['?', '#']).next().unwrap_or(path).to_string(),
        }
    }

    /// Create asset URL (no trailing slash normalization).
    pub fn from_asset(decoded: &str) -> Self {
        let trimmed = decoded.trim();

        // Handle empty path
        if trimmed.is_empty() {
            return Self(Arc::from("/"));
        }

        // Add leading slash if missing
        let normalized = if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{}", trimmed)
        };

        Self(Arc::from(normalized))
    }

    /// Get the decoded URL path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Encode for output (percent-encode non-ASCII and special characters).
    ///
    /// Unreserved characters (RFC 3986) pass through untouched.
    pub fn to_encoded(&self) -> String {
        use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

        const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
            .remove(b'-')
            .remove(b'_')
            .remove(b'.')
            .remove(b'~');

        self.0
            .split('/')
            .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Check if path starts with the given prefix.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }

    /// Check if this is a page URL (ends with `/`).
    #[inline]
    pub fn is_page_url(&self) -> bool {
        self.0.ends_with('/')
    }
}

impl std::fmt::Display for UrlPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for UrlPath {
    fn default() -> Self {
        Self::from_page("/")
    }
}

impl AsRef<str> for UrlPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for UrlPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<String> for UrlPath {
    fn from(s: String) -> Self {
        Self::from_page(&s)
    }
}

impl From<&str> for UrlPath {
    fn from(s: &str) -> Self {
        Self::from_page(s)
    }
}

impl PartialEq<str> for UrlPath {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for UrlPath {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for UrlPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UrlPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_page(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_content_path_blog_post() {
        let url = UrlPath::from_content_path(Path::new("blog/dataview.md"));
        assert_eq!(url.as_str(), "/blog/dataview/");
    }

    #[test]
    fn test_from_content_path_doc_index() {
        let url = UrlPath::from_content_path(Path::new("docs/index.md"));
        assert_eq!(url.as_str(), "/docs/");
    }

    #[test]
    fn test_from_content_path_root_index() {
        let url = UrlPath::from_content_path(Path::new("index.md"));
        assert_eq!(url.as_str(), "/");
    }

    #[test]
    fn test_from_content_path_dotted_stem() {
        let url = UrlPath::from_content_path(Path::new("blog/v8-release-7.4.md"));
        assert_eq!(url.as_str(), "/blog/v8-release-7.4/");
    }

    #[test]
    fn test_from_page() {
        let url = UrlPath::from_page("/docs/build/");
        assert_eq!(url.as_str(), "/docs/build/");
    }

    #[test]
    fn test_from_page_adds_leading_slash() {
        let url = UrlPath::from_page("docs/build/");
        assert_eq!(url.as_str(), "/docs/build/");
    }

    #[test]
    fn test_from_page_strips_query() {
        let url = UrlPath::from_page("/blog/dataview?v=1");
        assert_eq!(url.as_str(), "/blog/dataview/");
    }

    #[test]
    fn test_from_page_strips_fragment() {
        let url = UrlPath::from_page("/docs/contribute#code-of-conduct");
        assert_eq!(url.as_str(), "/docs/contribute/");
    }

    #[test]
    fn test_from_page_strips_query_and_fragment() {
        let url = UrlPath::from_page("/blog/dataview?v=1#setup");
        assert_eq!(url.as_str(), "/blog/dataview/");
    }

    #[test]
    fn test_to_encoded_ascii_unchanged() {
        let url = UrlPath::from_page("/features/dynamic-import/");
        assert_eq!(url.to_encoded(), "/features/dynamic-import/");
    }

    #[test]
    fn test_to_encoded_non_ascii() {
        let url = UrlPath::from_page("/blog/中文/");
        assert_eq!(url.to_encoded(), "/blog/%E4%B8%AD%E6%96%87/");
    }

    #[test]
    fn test_starts_with() {
        let url = UrlPath::from_page("/blog/dataview/");
        assert!(url.starts_with("/blog"));
        assert!(url.starts_with("/blog/"));
        assert!(!url.starts_with("/docs"));
    }

    #[test]
    fn test_is_page_url() {
        assert!(UrlPath::from_page("/blog/dataview/").is_page_url());
        assert!(UrlPath::from_page("/").is_page_url());
        assert!(!UrlPath::from_asset("/_img/v8.svg").is_page_url());
    }

    #[test]
    fn test_from_asset() {
        let url = UrlPath::from_asset("_img/docs/logo.png");
        assert_eq!(url.as_str(), "/_img/docs/logo.png");
    }

    #[test]
    fn test_equality() {
        let url1 = UrlPath::from_page("/blog/dataview/");
        let url2 = UrlPath::from_page("/blog/dataview/");
        let url3 = UrlPath::from_page("/blog/pointer-compression/");

        assert_eq!(url1, url2);
        assert_ne!(url1, url3);
    }

    #[test]
    fn test_hash() {
        use rustc_hash::FxHashSet;

        let mut set = FxHashSet::default();
        set.insert(UrlPath::from_page("/blog/dataview/"));
        set.insert(UrlPath::from_page("/blog/dataview/")); // duplicate

        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_serialize_deserialize() {
        let url = UrlPath::from_page("/blog/dataview/");
        let json = serde_json::to_string(&url).unwrap();
        assert_eq!(json, r#""/blog/dataview/""#);

        let parsed: UrlPath = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, url);
    }

    #[test]
    fn test_display() {
        let url = UrlPath::from_page("/blog/dataview/");
        assert_eq!(format!("{}", url), "/blog/dataview/");
    }

    #[test]
    fn test_as_ref() {
        let url = UrlPath::from_page("/blog/dataview/");
        let s: &str = url.as_ref();
        assert_eq!(s, "/blog/dataview/");
    }
}
