//! Common plumbing for feed generation.

use crate::dom::{Element, parse_fragment};
use crate::generator::filters;
use crate::log;
use crate::page::{STORED_PAGES, StoredPage};
use crate::utils::date::DateTimeUtc;

/// A blog post validated for feed inclusion.
#[derive(Debug, Clone)]
pub struct FeedPage {
    pub title: String,
    pub date: DateTimeUtc,
    pub permalink: String,
    pub summary: Option<String>,
    pub author: Option<String>,
}

impl FeedPage {
    fn from_stored(page: &StoredPage) -> Option<Self> {
        Some(Self {
            title: page.meta.title.clone()?,
            date: page.date()?,
            permalink: page.permalink.as_str().to_string(),
            summary: page
                .meta
                .description
                .as_deref()
                .map(|text| filters::decode_html_entities(text).into_owned()),
            author: page.meta.author.as_deref().map(plain_author),
        })
    }
}

/// Posts eligible for the feed, newest first.
///
/// `get_posts` already restricts to dated pages under `/blog/`; posts
/// whose date fails to parse or that lack a title are dropped here.
pub fn get_feed_pages() -> Vec<FeedPage> {
    let posts = STORED_PAGES.get_posts();
    let total = posts.len();

    let feed_pages: Vec<FeedPage> = posts.iter().filter_map(FeedPage::from_stored).collect();

    let excluded = total - feed_pages.len();
    if excluded > 0 {
        log!("feed"; "excluded {excluded} posts with missing title or malformed date");
    }

    feed_pages
}

/// Author fields carry markdown links; feeds want the bare name.
fn plain_author(author: &str) -> String {
    let rendered = filters::markdown_inline(author);
    let mut wrapper = Element::new("span");
    wrapper.children = parse_fragment(&rendered);
    wrapper.text_content()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_author_strips_markdown_link() {
        assert_eq!(
            plain_author("[Mathias Bynens](https://twitter.com/mathias)"),
            "Mathias Bynens"
        );
        assert_eq!(plain_author("Jakob Gruber"), "Jakob Gruber");
    }

    #[test]
    fn test_plain_author_joins_multiple_links() {
        assert_eq!(
            plain_author("[A](https://a.dev) and [B](https://b.dev)"),
            "A and B"
        );
    }
}
