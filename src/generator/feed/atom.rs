//! Atom 1.0 feed generation.

use super::common::{FeedPage, get_feed_pages};
use crate::{config::SiteConfig, generator::minify_xml, log, utils::date::DateTimeUtc};
use anyhow::Result;
use atom_syndication::{
    Entry, EntryBuilder, Feed, FeedBuilder, FixedDateTime, GeneratorBuilder, Link, LinkBuilder,
    Person, PersonBuilder, Text,
};
use std::fs;

/// Build the Atom feed from stored blog posts.
pub fn build_atom(config: &SiteConfig) -> Result<()> {
    AtomFeed::build(config).write()
}

struct AtomFeed {
    config: SiteConfig,
    pages: Vec<FeedPage>,
}

impl AtomFeed {
    fn build(config: &SiteConfig) -> Self {
        Self {
            config: config.clone(),
            pages: get_feed_pages(),
        }
    }

    fn into_xml(self) -> String {
        let base_url = self.config.site.base_url().unwrap_or_default();

        let entries: Vec<Entry> = self
            .pages
            .iter()
            .filter_map(|page| page_to_atom_entry(page, base_url))
            .collect();

        // Posts come newest first, so the first date is the feed's updated time
        let updated_str = self
            .pages
            .iter()
            .map(|page| page.date)
            .max()
            .map(DateTimeUtc::to_rfc3339)
            .unwrap_or_else(|| "1970-01-01T00:00:00Z".to_string());
        let updated: FixedDateTime = updated_str
            .parse()
            .unwrap_or_else(|_| FixedDateTime::default());

        let author: Person = PersonBuilder::default()
            .name(self.config.site.author.clone())
            .email(Some(self.config.site.email.clone()))
            .build();

        let self_link: Link = LinkBuilder::default()
            .href(format!("{}/{}", base_url, self.config.build.feed.path))
            .rel("self".to_string())
            .mime_type(Some("application/atom+xml".to_string()))
            .build();

        let alternate_link: Link = LinkBuilder::default()
            .href(base_url.to_string())
            .rel("alternate".to_string())
            .build();

        let feed: Feed = FeedBuilder::default()
            .title(Text::plain(self.config.site.title.clone()))
            .id(base_url)
            .updated(updated)
            .authors(vec![author])
            .links(vec![self_link, alternate_link])
            .subtitle(Some(Text::plain(self.config.site.description.clone())))
            .generator(Some(
                GeneratorBuilder::default()
                    .value("v8dev")
                    .uri(Some("https://github.com/v8/v8.dev".to_string()))
                    .build(),
            ))
            .lang(self.config.site.language.clone())
            .entries(entries)
            .build();

        feed.to_string()
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

        log!("atom"; "{}", feed_path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}

fn page_to_atom_entry(page: &FeedPage, base_url: &str) -> Option<Entry> {
    let updated: FixedDateTime = page.date.to_rfc3339().parse().ok()?;
    let link = format!("{}{}", base_url, page.permalink);

    let entry_link: Link = LinkBuilder::default()
        .href(&link)
        .rel("alternate".to_string())
        .build();

    let authors: Vec<Person> = page
        .author
        .as_ref()
        .map(|name| vec![PersonBuilder::default().name(name.clone()).build()])
        .unwrap_or_default();

    Some(
        EntryBuilder::default()
            .title(Text::plain(page.title.clone()))
            .id(&link)
            .updated(updated)
            .links(vec![entry_link])
            .summary(page.summary.clone().map(Text::plain))
            .authors(authors)
            .build(),
    )
}
