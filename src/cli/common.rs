//! Shared helpers for CLI commands.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::compiler::markdown::MarkdownMetaExtractor;
use crate::compiler::{collect_all_files, filter_drafts, scan_content};
use crate::config::SiteConfig;
use crate::page::STORED_PAGES;

/// Markdown and raw HTML sources under the content root, in stable order.
///
/// The batch commands (`fix`, `convert`) work on sources the build treats
/// as opaque, so they collect by extension instead of going through the
/// route scanner.
pub fn collect_documents(config: &SiteConfig) -> Vec<PathBuf> {
    let mut files: Vec<_> = collect_all_files(&config.build.content)
        .into_iter()
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| matches!(ext, "md" | "html"))
        })
        .collect();
    files.sort();
    files
}

/// Fill the page store from frontmatter alone, without compiling.
///
/// `query` needs the same collections a build would produce; parsing just
/// the frontmatter of each route is enough for that. Draft filtering
/// follows `build.drafts`.
pub fn populate_stored_pages(config: &SiteConfig) -> Result<()> {
    let scan = scan_content(config);
    let routes = if config.build.drafts {
        scan.routes
    } else {
        filter_drafts(scan.routes).routes
    };

    let entries = routes
        .par_iter()
        .map(|route| {
            let content = fs::read_to_string(&route.source)
                .with_context(|| format!("failed to read {}", route.source.display()))?;
            let meta = MarkdownMetaExtractor
                .extract_frontmatter(&content)
                .with_context(|| format!("malformed frontmatter in {}", route.source.display()))?
                .map(|(meta, _)| meta)
                .unwrap_or_default();
            Ok((route.permalink.clone(), meta))
        })
        .collect::<Result<Vec<_>>>()?;

    STORED_PAGES.clear();
    for (permalink, meta) in entries {
        STORED_PAGES.insert_page(permalink, meta);
    }
    Ok(())
}
