//! `query` command: print a collection as JSON.

use anyhow::Result;

use crate::cli::QueryCollection;
use crate::cli::common::populate_stored_pages;
use crate::config::SiteConfig;
use crate::page::STORED_PAGES;

/// Scan the content tree and print the requested collection.
///
/// Output matches what templates see: drafts are excluded unless the
/// command asked for them.
pub fn run_query(collection: QueryCollection, config: &SiteConfig) -> Result<()> {
    populate_stored_pages(config)?;

    let json = match collection {
        QueryCollection::Posts => serde_json::to_string_pretty(&STORED_PAGES.get_posts()),
        QueryCollection::Features => serde_json::to_string_pretty(&STORED_PAGES.get_features()),
        QueryCollection::All => serde_json::to_string_pretty(&STORED_PAGES.get_all_posts()),
        QueryCollection::Tags => serde_json::to_string_pretty(&STORED_PAGES.tag_list()),
    }?;
    println!("{json}");
    Ok(())
}
