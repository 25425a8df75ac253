//! Configuration section definitions.

mod assets;
mod build;
mod feed;
mod site;
mod sitemap;

pub use assets::AssetsSection;
pub use build::BuildSection;
pub use feed::{FeedFormat, FeedSection};
pub use site::SiteSection;
pub use sitemap::SitemapSection;
