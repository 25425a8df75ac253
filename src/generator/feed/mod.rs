//! Feed generation (Atom, RSS).

use crate::config::{FeedFormat, SiteConfig};
use anyhow::Result;

pub mod atom;
mod common;
pub mod rss;

/// Build the configured feed, if enabled.
pub fn build_feed(config: &SiteConfig) -> Result<()> {
    if config.build.feed.enable {
        match config.build.feed.format {
            FeedFormat::Rss => rss::build_rss(config)?,
            FeedFormat::Atom => atom::build_atom(config)?,
        }
    }
    Ok(())
}
