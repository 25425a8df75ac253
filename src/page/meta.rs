//! Page metadata from markdown frontmatter.

use serde::Deserialize;

use super::JsonMap;
use crate::utils::date::DateTimeUtc;

/// Deserialize tags, treating `null` as empty vec
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Page metadata from frontmatter
///
/// # Standard Fields
///
/// | Field         | Type           | Description                    |
/// |---------------|----------------|--------------------------------|
/// | `title`       | `String`       | Page title                     |
/// | `description` | `String`       | Meta description / feed summary|
/// | `date`        | `String`       | Publication date               |
/// | `author`      | `String`       | Author name (may contain markdown) |
/// | `draft`       | `bool`         | Draft status (default: false)  |
/// | `tags`        | `Vec<String>`  | Categorization tags            |
///
/// # Custom Fields (`extra`)
///
/// Any additional fields (`avatars`, `tweet`, `cta`, ...) are captured in
/// `extra` as raw JSON and round-trip through `query` output unchanged.
#[derive(Debug, Clone, serde::Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PageMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
    #[serde(default)]
    pub draft: bool,
    /// Tags for categorizing the page.
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
    /// Additional user-defined fields (raw JSON).
    #[serde(flatten, default)]
    pub extra: JsonMap,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            date: None,
            author: None,
            draft: false,
            tags: Vec::new(),
            extra: JsonMap::new(),
        }
    }
}

impl PageMeta {
    /// Parsed publication date, if present and well-formed.
    pub fn parsed_date(&self) -> Option<DateTimeUtc> {
        self.date.as_deref().and_then(DateTimeUtc::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_meta_default() {
        let meta = PageMeta::default();
        assert!(meta.title.is_none());
        assert!(!meta.draft);
        assert!(meta.tags.is_empty());
    }

    #[test]
    fn test_page_meta_deserialize() {
        let json = r#"{"title": "DataView performance", "draft": true, "tags": ["internals", "benchmarks"]}"#;
        let meta: PageMeta = serde_json::from_str(json).unwrap();
        assert_eq!(meta.title.as_deref(), Some("DataView performance"));
        assert!(meta.draft);
        assert_eq!(meta.tags, vec!["internals", "benchmarks"]);
    }

    #[test]
    fn test_null_tags_become_empty() {
        let json = r#"{"title": "x", "tags": null}"#;
        let meta: PageMeta = serde_json::from_str(json).unwrap();
        assert!(meta.tags.is_empty());
    }

    #[test]
    fn test_extra_fields_preserved() {
        let json = r#"{"title": "x", "tweet": "1062000102624427008", "avatars": ["maya-armyanova"]}"#;
        let meta: PageMeta = serde_json::from_str(json).unwrap();
        assert_eq!(
            meta.extra.get("tweet"),
            Some(&serde_json::json!("1062000102624427008"))
        );
        assert_eq!(
            meta.extra.get("avatars"),
            Some(&serde_json::json!(["maya-armyanova"]))
        );
    }

    #[test]
    fn test_parsed_date() {
        let meta = PageMeta {
            date: Some("2018-11-12 16:45:07".into()),
            ..Default::default()
        };
        let dt = meta.parsed_date().unwrap();
        assert_eq!((dt.year, dt.month, dt.day), (2018, 11, 12));

        let bad = PageMeta {
            date: Some("sometime".into()),
            ..Default::default()
        };
        assert!(bad.parsed_date().is_none());
    }
}
