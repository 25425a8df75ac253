//! Site building orchestration.
//!
//! Build phases:
//! - **Init** - optional clean, output directory, embedded scripts
//! - **Collect** - scan content into page routes and asset files
//! - **Filter** - drop drafts (unless `--drafts`)
//! - **Compile** - parallel page compilation + asset copying
//! - **Finalize** - redirects artifact, logging

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result, anyhow};
use rayon::prelude::*;

use crate::asset::process_asset;
use crate::compiler::{
    ContentScan, PageRoute, compile_page, filter_drafts, scan_content, write_page,
};
use crate::config::SiteConfig;
use crate::log;
use crate::logger::ProgressLine;
use crate::page::STORED_PAGES;
use crate::utils::plural_s;

/// Build the entire site.
///
/// Feed and sitemap generation run after this from the page store it
/// fills; see `build_all` in main.
pub fn build_site(config: &SiteConfig) -> Result<()> {
    init_output(config)?;

    let ContentScan { routes, assets } = scan_content(config);
    let (routes, draft_count) = filter_routes(config, routes);

    let progress = ProgressLine::new(&[("pages", routes.len()), ("assets", assets.len())]);

    let has_error = AtomicBool::new(false);
    let (pages_result, assets_result) = rayon::join(
        || compile_pages(&routes, config, &has_error, &progress),
        || process_assets(&assets, config, &has_error, &progress),
    );
    pages_result?;
    assets_result?;

    progress.finish();

    if draft_count > 0 {
        log!("build"; "{} draft{} skipped", draft_count, plural_s(draft_count));
    }

    crate::redirects::write_artifact(&config.build.output)?;

    log!("build"; "done");
    Ok(())
}

/// Prepare the output directory and write the embedded scripts.
fn init_output(config: &SiteConfig) -> Result<()> {
    let output = &config.build.output;
    if config.build.clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("failed to clear output directory {}", output.display()))?;
    }
    fs::create_dir_all(output).with_context(|| format!("failed to create {}", output.display()))?;

    STORED_PAGES.clear();
    crate::embed::write_embedded_assets(config)
}

/// Drop drafts unless the build asked for them.
fn filter_routes(config: &SiteConfig, routes: Vec<PageRoute>) -> (Vec<PageRoute>, usize) {
    if config.build.drafts {
        return (routes, 0);
    }
    let result = filter_drafts(routes);
    (result.routes, result.draft_count)
}

/// Compile and write every page in parallel, feeding the page store.
///
/// The first failure logs its error and flags the rest of the batch to
/// abort; the generators never run over a half-built store.
fn compile_pages(
    routes: &[PageRoute],
    config: &SiteConfig,
    has_error: &AtomicBool,
    progress: &ProgressLine,
) -> Result<()> {
    routes.par_iter().try_for_each(|route| {
        if has_error.load(Ordering::Relaxed) {
            return Err(anyhow!("Aborted"));
        }
        let result = compile_page(route, config).and_then(|page| {
            write_page(route, &page.html)?;
            Ok(page.meta)
        });
        match result {
            Ok(meta) => {
                STORED_PAGES.insert_page(route.permalink.clone(), meta);
                progress.inc("pages");
                Ok(())
            }
            Err(e) => {
                if !has_error.swap(true, Ordering::Relaxed) {
                    log!("error"; "{}: {:#}", route.relative.display(), e);
                }
                Err(anyhow!("Build failed"))
            }
        }
    })
}

/// Copy static assets in parallel.
fn process_assets(
    assets: &[PathBuf],
    config: &SiteConfig,
    has_error: &AtomicBool,
    progress: &ProgressLine,
) -> Result<()> {
    assets.par_iter().try_for_each(|path| {
        if has_error.load(Ordering::Relaxed) {
            return Err(anyhow!("Aborted"));
        }
        if let Err(e) = process_asset(path, config, false) {
            if !has_error.swap(true, Ordering::Relaxed) {
                log!("error"; "{}: {:#}", path.display(), e);
            }
            return Err(anyhow!("Build failed"));
        }
        progress.inc("assets");
        Ok(())
    })
}
