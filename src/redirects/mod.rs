//! Legacy-URL redirect table.
//!
//! The blog lived on Blogger and the docs on the GitHub wiki before the
//! site existed. This module maps each historical URL to its current
//! location: a lookup API for the `redirect` command, and a JSON artifact
//! emitted during the build for the hosting layer.
//!
//! Lookups are exact string matches. No scheme, case, or trailing-slash
//! normalization is applied, since the table keys are the URLs exactly as
//! they were once published.

mod table;

use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;

static OLD_TO_NEW: LazyLock<FxHashMap<&'static str, &'static str>> =
    LazyLock::new(|| table::URL_MAPPINGS.iter().copied().collect());

/// Look up the current URL for a historical one.
pub fn lookup(old: &str) -> Option<&'static str> {
    OLD_TO_NEW.get(old).copied()
}

/// Number of mappings in the table.
pub fn len() -> usize {
    table::URL_MAPPINGS.len()
}

/// Write `redirects.json` (old → new object, table order) into the output
/// root.
pub fn write_artifact(output: &Path) -> Result<()> {
    let map: serde_json::Map<String, serde_json::Value> = table::URL_MAPPINGS
        .iter()
        .map(|&(old, new)| (old.to_owned(), serde_json::Value::from(new)))
        .collect();

    let path = output.join("redirects.json");
    let json = serde_json::to_string(&map).context("failed to serialize redirects")?;
    std::fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_blog_url() {
        assert_eq!(
            lookup("https://v8project.blogspot.com/2018/09/dataview.html"),
            Some("https://v8.dev/blog/dataview")
        );
    }

    #[test]
    fn test_lookup_wiki_url() {
        assert_eq!(
            lookup("https://github.com/v8/v8/wiki/Using-D8"),
            Some("https://v8.dev/docs/d8")
        );
    }

    #[test]
    fn test_lookup_is_exact() {
        // A trailing slash or scheme change misses; keys are matched as-is.
        assert_eq!(
            lookup("https://v8project.blogspot.com/2018/09/dataview.html/"),
            None
        );
        assert_eq!(
            lookup("http://v8project.blogspot.com/2018/09/dataview.html"),
            None
        );
        assert_eq!(lookup("https://v8.dev/blog/dataview"), None);
    }

    #[test]
    fn test_smart_quote_key_survives() {
        // The wiki page title used U+2019, not an ASCII apostrophe.
        assert_eq!(
            lookup("https://github.com/v8/v8/wiki/Using-V8\u{2019}s-internal-profiler"),
            Some("https://v8.dev/docs/profile")
        );
        assert_eq!(
            lookup("https://github.com/v8/v8/wiki/Using-V8's-internal-profiler"),
            None
        );
    }

    #[test]
    fn test_table_is_complete() {
        assert_eq!(len(), 126);
        assert_eq!(OLD_TO_NEW.len(), 126);
    }

    #[test]
    fn test_artifact_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path()).unwrap();

        let json = std::fs::read_to_string(dir.path().join("redirects.json")).unwrap();
        let map: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&json).unwrap();
        assert_eq!(map.len(), 126);
        assert_eq!(
            map["https://github.com/v8/v8/wiki/TurboFan"],
            "https://v8.dev/docs/turbofan"
        );
    }
}
