//! Global page storage for collections, feed and sitemap.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use parking_lot::RwLock;
use serde::Serialize;

use super::{PageKind, PageMeta};
use crate::core::UrlPath;
use crate::utils::date::DateTimeUtc;

/// Global page data store
pub static STORED_PAGES: LazyLock<StoredPageMap> = LazyLock::new(StoredPageMap::new);

/// A page entry stored in the global page data
///
/// Combines the computed permalink with frontmatter metadata.
/// Serializes with `permalink` as top-level field and PageMeta flattened
#[derive(Debug, Clone, Serialize)]
pub struct StoredPage {
    /// The page's permalink (URL path).
    pub permalink: UrlPath,
    /// Page metadata from frontmatter (flattened in JSON output).
    #[serde(flatten)]
    pub meta: PageMeta,
}

impl StoredPage {
    pub fn new(permalink: UrlPath, meta: PageMeta) -> Self {
        Self { permalink, meta }
    }

    /// Check if this page is a draft.
    #[inline]
    pub fn is_draft(&self) -> bool {
        self.meta.draft
    }

    /// Get title, falling back to permalink if not set.
    pub fn title(&self) -> &str {
        self.meta
            .title
            .as_deref()
            .unwrap_or_else(|| self.permalink.as_str())
    }

    /// Site section this page belongs to.
    pub fn kind(&self) -> PageKind {
        PageKind::from_url(&self.permalink)
    }

    /// Parsed publication date.
    pub fn date(&self) -> Option<DateTimeUtc> {
        self.meta.parsed_date()
    }

    /// Blog post: a dated page under `/blog/`.
    pub fn is_post(&self) -> bool {
        self.kind().is_blog() && self.meta.date.is_some()
    }
}

/// Thread-safe storage for site-wide page data
///
/// Maps permalink (`UrlPath`) to `StoredPage`. BTreeMap keeps pages in
/// URL order so per-build artifacts come out deterministic.
#[derive(Debug, Default)]
pub struct StoredPageMap {
    pages: RwLock<BTreeMap<UrlPath, StoredPage>>,
}

impl StoredPageMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&self) {
        self.pages.write().clear();
    }

    /// Insert or update a page.
    pub fn insert_page(&self, permalink: UrlPath, meta: PageMeta) {
        self.pages
            .write()
            .insert(permalink.clone(), StoredPage::new(permalink, meta));
    }

    /// All non-draft pages in URL order.
    pub fn get_pages(&self) -> Vec<StoredPage> {
        self.pages
            .read()
            .values()
            .filter(|p| !p.is_draft())
            .cloned()
            .collect()
    }

    /// Blog posts (dated pages under `/blog/`), newest first.
    pub fn get_posts(&self) -> Vec<StoredPage> {
        let mut posts: Vec<_> = self
            .pages
            .read()
            .values()
            .filter(|p| !p.is_draft() && p.is_post())
            .cloned()
            .collect();
        Self::sort_newest_first(&mut posts);
        posts
    }

    /// Feature explainers, newest first (undated features sort last).
    pub fn get_features(&self) -> Vec<StoredPage> {
        let mut features: Vec<_> = self
            .pages
            .read()
            .values()
            .filter(|p| !p.is_draft() && p.kind() == PageKind::Features)
            .cloned()
            .collect();
        Self::sort_newest_first(&mut features);
        features
    }

    /// Blog posts and feature explainers merged, newest first.
    pub fn get_all_posts(&self) -> Vec<StoredPage> {
        let mut all: Vec<_> = self
            .pages
            .read()
            .values()
            .filter(|p| !p.is_draft() && (p.is_post() || p.kind() == PageKind::Features))
            .cloned()
            .collect();
        Self::sort_newest_first(&mut all);
        all
    }

    /// Sorted, deduplicated tag list across all non-draft pages.
    pub fn tag_list(&self) -> Vec<String> {
        let pages = self.pages.read();
        let mut tags: Vec<String> = pages
            .values()
            .filter(|p| !p.is_draft())
            .flat_map(|p| p.meta.tags.iter().cloned())
            .collect();
        tags.sort();
        tags.dedup();
        tags
    }

    /// Sort by date descending, then by title.
    ///
    /// Frontmatter dates are ISO-ordered strings, so string comparison
    /// matches chronological order.
    fn sort_newest_first(pages: &mut [StoredPage]) {
        pages.sort_by(|a, b| match (&b.meta.date, &a.meta.date) {
            (Some(date_b), Some(date_a)) => date_b.cmp(date_a),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.title().cmp(b.title()),
        });
    }
}
