//! RSS 2.0 feed generation.

use super::common::{FeedPage, get_feed_pages};
use crate::{config::SiteConfig, generator::minify_xml, log, utils::date::DateTimeUtc};
use anyhow::Result;
use rss::validation::Validate;
use rss::{Channel, ChannelBuilder, GuidBuilder, Item, ItemBuilder};
use std::fs;

/// Build the RSS feed from stored blog posts.
pub fn build_rss(config: &SiteConfig) -> Result<()> {
    RssFeed::build(config).write()
}

struct RssFeed {
    config: SiteConfig,
    pages: Vec<FeedPage>,
}

impl RssFeed {
    fn build(config: &SiteConfig) -> Self {
        Self {
            config: config.clone(),
            pages: get_feed_pages(),
        }
    }

    fn into_xml(self) -> String {
        let base_url = self.config.site.base_url().unwrap_or_default();

        let items: Vec<Item> = self
            .pages
            .iter()
            .map(|page| page_to_rss_item(page, base_url, &self.config))
            .collect();

        let last_build_date = self
            .pages
            .iter()
            .map(|page| page.date)
            .max()
            .map(DateTimeUtc::to_rfc2822);

        let channel: Channel = ChannelBuilder::default()
            .title(self.config.site.title.clone())
            .link(base_url.to_string())
            .description(self.config.site.description.clone())
            .language(Some(self.config.site.language.clone()))
            .last_build_date(last_build_date)
            .generator(Some("v8dev".to_string()))
            .items(items)
            .build();

        if let Err(err) = channel.validate() {
            log!("warning"; "rss validation: {err}");
        }

        channel.to_string()
    }

    fn write(self) -> Result<()> {
        let minify = self.config.build.minify;
        let feed_path = self.config.build.output.join(&self.config.build.feed.path);
        let xml = self.into_xml();
        let xml = minify_xml(xml.as_bytes(), minify);

        if let Some(parent) = feed_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&feed_path, &*xml)?;

        log!("rss"; "{}", feed_path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}

fn page_to_rss_item(page: &FeedPage, base_url: &str, config: &SiteConfig) -> Item {
    let link = format!("{}{}", base_url, page.permalink);

    ItemBuilder::default()
        .title(Some(page.title.clone()))
        .link(Some(link.clone()))
        .guid(Some(GuidBuilder::default().value(link).permalink(true).build()))
        .pub_date(Some(page.date.to_rfc2822()))
        .description(page.summary.clone())
        .author(rss_author(page.author.as_deref(), config))
        .build()
}

/// RSS authors are "email (Name)"; the site email backs entries whose
/// author has none of their own.
fn rss_author(author: Option<&str>, config: &SiteConfig) -> Option<String> {
    let name = author.unwrap_or(&config.site.author);
    if name.is_empty() {
        return None;
    }
    if config.site.email.is_empty() {
        return Some(name.to_string());
    }
    Some(format!("{} ({})", config.site.email, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn sample_page() -> FeedPage {
        FeedPage {
            title: "Orinoco: young generation garbage collection".to_string(),
            date: DateTimeUtc::from_ymd(2017, 11, 29),
            permalink: "/blog/orinoco-parallel-scavenger/".to_string(),
            summary: Some("Parallel scavenging in V8".to_string()),
            author: Some("Ulan Degenbaev".to_string()),
        }
    }

    #[test]
    fn test_item_fields() {
        let config = test_parse_config("email = \"info@example.com\"\n");
        let item = page_to_rss_item(&sample_page(), "https://v8.dev", &config);

        assert_eq!(
            item.link.as_deref(),
            Some("https://v8.dev/blog/orinoco-parallel-scavenger/")
        );
        assert_eq!(
            item.pub_date.as_deref(),
            Some("Wed, 29 Nov 2017 00:00:00 GMT")
        );
        assert_eq!(
            item.author.as_deref(),
            Some("info@example.com (Ulan Degenbaev)")
        );
        assert!(item.guid.as_ref().is_some_and(|guid| guid.permalink));
    }

    #[test]
    fn test_rss_author_fallbacks() {
        let config = test_parse_config("author = \"the V8 team\"\nemail = \"info@example.com\"\n");
        assert_eq!(
            rss_author(None, &config).as_deref(),
            Some("info@example.com (the V8 team)")
        );

        let bare = test_parse_config("");
        assert_eq!(rss_author(None, &bare), None);
        assert_eq!(rss_author(Some("Ada"), &bare).as_deref(), Some("Ada"));
    }

    #[test]
    fn test_channel_xml() {
        let feed = RssFeed {
            config: test_parse_config(""),
            pages: vec![sample_page()],
        };
        let xml = feed.into_xml();

        assert!(xml.contains("<title>V8</title>"));
        assert!(xml.contains("<link>https://v8.dev</link>"));
        assert!(xml.contains("Orinoco"));
        assert!(xml.contains("Wed, 29 Nov 2017"));
    }
}
