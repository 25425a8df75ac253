//! Asset copying into the output tree.
//!
//! Passthrough directories keep their structure (`_img/a/b.png` lands at
//! `dist/_img/a/b.png`); flatten entries land at the output root. JS and
//! CSS files are minified on the way through when minification is on.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::SiteConfig;
use crate::log;

/// Copy one asset file from the content tree into the output tree.
pub fn process_asset(path: &Path, config: &SiteConfig, log_file: bool) -> Result<()> {
    let rel = config.content_relative(path);
    let output = output_path(&rel, config);

    if log_file {
        log!("assets"; "{}", rel.display());
    }

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    if config.build.minify && wants_minification(path) {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let minified = super::minify::minify_by_ext(path, &source).unwrap_or(source);
        fs::write(&output, minified)
            .with_context(|| format!("failed to write {}", output.display()))?;
    } else {
        fs::copy(path, &output).with_context(|| {
            format!("failed to copy {} to {}", path.display(), output.display())
        })?;
    }
    Ok(())
}

/// Flatten entries map to the output root, everything else keeps its
/// content-relative path.
fn output_path(rel: &Path, config: &SiteConfig) -> PathBuf {
    let flattened = config.build.assets.flatten.iter().any(|f| f == rel);
    if flattened && let Some(name) = rel.file_name() {
        return config.build.output.join(name);
    }
    config.build.output.join(rel)
}

/// Minify `.js`/`.css`, leaving pre-minified `.min.*` files alone.
fn wants_minification(path: &Path) -> bool {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    if ext != "js" && ext != "css" {
        return false;
    }
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    !stem.ends_with(".min")
}
