//! v8dev - the build tooling behind the V8 project site.

#![allow(dead_code)]

mod asset;
mod cli;
mod compiler;
mod config;
mod core;
mod dom;
mod embed;
mod generator;
mod highlight;
mod logger;
mod media;
mod page;
mod pipeline;
mod redirects;
mod support;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, build::build_site};
use config::SiteConfig;
use generator::{feed::build_feed, sitemap::build_sitemap};

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(cli)?;

    match &cli.command {
        Commands::Build { .. } => build_all(&config),
        Commands::Query { collection, .. } => cli::query::run_query(*collection, &config),
        Commands::Fix { intrinsic } => cli::fix::run_fix(&config, *intrinsic),
        Commands::Convert => cli::convert::run_convert(&config),
        Commands::Redirect { url } => cli::redirect::run_redirect(url),
    }
}

/// Build the site, then generate the feed and sitemap in parallel.
fn build_all(config: &SiteConfig) -> Result<()> {
    build_site(config)?;

    let (feed_result, sitemap_result) =
        rayon::join(|| build_feed(config), || build_sitemap(config));
    feed_result?;
    sitemap_result?;
    Ok(())
}
