//! Sitemap generation.
//!
//! Writes `sitemap.xml` listing every stored page with its clean URL
//! and, when the page is dated, a `lastmod` entry:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://v8.dev/blog/orinoco-parallel-scavenger</loc>
//!     <lastmod>2017-11-29</lastmod>
//!   </url>
//! </urlset>
//! ```

use crate::generator::{filters, minify_xml};
use crate::page::STORED_PAGES;
use crate::utils::date::DateTimeUtc;
use crate::{config::SiteConfig, log};
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Build the sitemap, if enabled.
pub fn build_sitemap(config: &SiteConfig) -> Result<()> {
    if config.build.sitemap.enable {
        Sitemap::build(config).write(config)?;
    }
    Ok(())
}

struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    lastmod: Option<String>,
}

impl Sitemap {
    fn build(config: &SiteConfig) -> Self {
        let base_url = config.site.base_url().unwrap_or_default();

        let urls: Vec<UrlEntry> = STORED_PAGES
            .get_pages()
            .iter()
            .map(|page| {
                let full_url = format!("{}{}", base_url, page.permalink.as_str());
                UrlEntry {
                    loc: filters::clean_url(&full_url, config).to_string(),
                    lastmod: page.date().map(DateTimeUtc::to_html_date),
                }
            })
            .collect();

        Self { urls }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n");
            if let Some(lastmod) = entry.lastmod {
                xml.push_str("    <lastmod>");
                xml.push_str(&lastmod);
                xml.push_str("</lastmod>\n");
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    fn write(self, config: &SiteConfig) -> Result<()> {
        let sitemap_path = config.build.output.join(&config.build.sitemap.path);
        let xml = self.into_xml();
        let xml = minify_xml(xml.as_bytes(), config.build.minify);

        if let Some(parent) = sitemap_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&sitemap_path, &*xml)
            .with_context(|| format!("failed to write sitemap to {}", sitemap_path.display()))?;

        log!("sitemap"; "{}", sitemap_path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
