//! `fix` command: backfill image and video dimensions in source files.
//!
//! Scans every document for `<img`/`<video` lines that lack explicit
//! dimensions, probes the referenced asset, and rewrites the line in
//! place. Each rewrite prints a before/after pair for manual audit
//! before committing the result.

use std::fs;
use std::sync::LazyLock;

use anyhow::{Context, Result, anyhow};
use regex::Regex;

use crate::cli::common::collect_documents;
use crate::config::SiteConfig;
use crate::log;
use crate::media;
use crate::utils::plural_s;

static IMG_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*<img.*$").unwrap());
static VIDEO_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*<video.*$").unwrap());
static SRC_ATTR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"src="/([^"]+)""#).unwrap());

/// Insert missing dimension attributes across all source documents.
///
/// With `intrinsic`, images get `intrinsicsize="WxH"` instead of
/// separate width/height attributes and videos are left alone.
pub fn run_fix(config: &SiteConfig, intrinsic: bool) -> Result<()> {
    let mut videos_seen = false;
    let mut updated_files = 0usize;

    for file in collect_documents(config) {
        let contents = fs::read_to_string(&file)
            .with_context(|| format!("failed to read {}", file.display()))?;
        let mut updated = contents.clone();

        let skip_marker = if intrinsic { "intrinsicsize" } else { " width=\"" };
        for m in IMG_LINE.find_iter(&contents) {
            let old_line = m.as_str();
            if old_line.contains(skip_marker) {
                continue;
            }
            match fixed_img_line(old_line, config, intrinsic) {
                Ok(new_line) => {
                    print_change(old_line, &new_line);
                    updated = updated.replacen(old_line, &new_line, 1);
                }
                Err(e) => eprintln!("{}: {:#}", file.display(), e),
            }
        }

        if !intrinsic {
            for m in VIDEO_LINE.find_iter(&contents) {
                videos_seen = true;
                let old_line = m.as_str();
                if old_line.contains(" width=\"") {
                    continue;
                }
                match fixed_video_line(old_line, config) {
                    Ok(new_line) => {
                        print_change(old_line, &new_line);
                        updated = updated.replacen(old_line, &new_line, 1);
                    }
                    Err(e) => eprintln!("{}: {:#}", file.display(), e),
                }
            }
        }

        if updated != contents {
            fs::write(&file, &updated)
                .with_context(|| format!("failed to write {}", file.display()))?;
            updated_files += 1;
        }
    }

    if !intrinsic && !videos_seen {
        log!("fix"; "no video tags found");
    }
    log!("fix"; "{} file{} updated", updated_files, plural_s(updated_files));
    Ok(())
}

fn fixed_img_line(line: &str, config: &SiteConfig, intrinsic: bool) -> Result<String> {
    let (w, h) = probe_line(line, config)?;
    let insertion = if intrinsic {
        format!(" intrinsicsize=\"{w}x{h}\" alt=\"")
    } else {
        format!(" width=\"{w}\" height=\"{h}\" alt=\"")
    };
    insert_before(line, " alt=\"", &insertion)
}

fn fixed_video_line(line: &str, config: &SiteConfig) -> Result<String> {
    let (w, h) = probe_line(line, config)?;
    let insertion = format!(" width=\"{w}\" height=\"{h}\" src=\"");
    insert_before(line, " src=\"", &insertion)
}

/// Probe the asset a tag line references, in display pixels.
///
/// `@2x` assets report half their bitmap size.
fn probe_line(line: &str, config: &SiteConfig) -> Result<(u32, u32)> {
    let src = SRC_ATTR
        .captures(line)
        .and_then(|c| c.get(1))
        .ok_or_else(|| anyhow!("no root-relative src attribute"))?;
    let asset = config.build.content.join(src.as_str());
    let (width, height) = media::probe_dimensions(&asset)
        .with_context(|| format!("failed to probe /{}", src.as_str()))?;
    Ok(if media::is_hidpi(&asset) {
        (width / 2, height / 2)
    } else {
        (width, height)
    })
}

fn insert_before(line: &str, marker: &str, insertion: &str) -> Result<String> {
    if !line.contains(marker) {
        return Err(anyhow!("no `{}` anchor", marker.trim()));
    }
    Ok(line.replacen(marker, insertion, 1))
}

fn print_change(old_line: &str, new_line: &str) {
    println!("{old_line}");
    println!(">>");
    println!("{new_line}");
    println!("------------");
}
