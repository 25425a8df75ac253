//! Media dimension probing.
//!
//! Shared by the embedding pass and the `fix` and `convert` commands: given
//! a path to a raster image, an SVG, or a video, return its pixel
//! dimensions. Results are cached process-wide since pages frequently
//! reference the same assets.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result, bail};
use dashmap::DashMap;

use crate::utils::exec::Cmd;

/// Media classification by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Bitmap formats decoded with the `image` crate.
    Raster,
    /// SVG, parsed with `usvg`.
    Vector,
    /// Video containers probed with `ffprobe`.
    Video,
}

impl MediaKind {
    /// Classify a path by its extension. Unknown extensions return `None`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" | "jpg" | "jpeg" | "webp" => Some(Self::Raster),
            "svg" => Some(Self::Vector),
            "mp4" | "webm" | "mov" => Some(Self::Video),
            _ => None,
        }
    }
}

/// Path → probed (width, height) mapping.
static PROBED_DIMENSIONS: LazyLock<DashMap<PathBuf, (u32, u32)>> = LazyLock::new(DashMap::new);

/// Probe the pixel dimensions of a media file, caching the result.
pub fn probe_dimensions(path: &Path) -> Result<(u32, u32)> {
    if let Some(cached) = PROBED_DIMENSIONS.get(path) {
        return Ok(*cached);
    }

    let kind = MediaKind::from_path(path)
        .with_context(|| format!("unsupported media type: {}", path.display()))?;

    let dims = match kind {
        MediaKind::Raster => image::image_dimensions(path)
            .with_context(|| format!("failed to read image dimensions of {}", path.display()))?,
        MediaKind::Vector => svg_dimensions(path)?,
        MediaKind::Video => video_dimensions(path)?,
    };

    if dims.0 == 0 || dims.1 == 0 {
        bail!(
            "invalid dimensions {}x{} in {}",
            dims.0,
            dims.1,
            path.display()
        );
    }

    PROBED_DIMENSIONS.insert(path.to_path_buf(), dims);
    Ok(dims)
}

/// Read SVG dimensions from the root element.
fn svg_dimensions(path: &Path) -> Result<(u32, u32)> {
    let data = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let tree = usvg::Tree::from_data(&data, &usvg::Options::default())
        .with_context(|| format!("failed to parse SVG {}", path.display()))?;
    let size = tree.size();
    Ok((size.width().round() as u32, size.height().round() as u32))
}

/// Probe video dimensions with `ffprobe` (first video stream).
fn video_dimensions(path: &Path) -> Result<(u32, u32)> {
    which::which("ffprobe")
        .context("`ffprobe` not found in PATH (required for video dimensions)")?;

    let output = Cmd::new("ffprobe")
        .args([
            "-v",
            "error",
            "-select_streams",
            "v:0",
            "-show_entries",
            "stream=width,height",
            "-of",
            "csv=s=x:p=0",
        ])
        .arg(path)
        .run()?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_ffprobe_output(&stdout)
        .with_context(|| format!("unexpected ffprobe output for {}: {stdout:?}", path.display()))
}

/// Parse "WIDTHxHEIGHT" from ffprobe csv output.
fn parse_ffprobe_output(stdout: &str) -> Option<(u32, u32)> {
    let (w, h) = stdout.trim().split_once('x')?;
    Some((w.parse().ok()?, h.parse().ok()?))
}

/// Insert `@2x` before the final extension: `/_img/foo.png` → `/_img/foo@2x.png`.
///
/// Returns `None` when the file name has no extension.
pub fn hidpi_variant(src: &str) -> Option<String> {
    let name_start = src.rfind('/').map_or(0, |i| i + 1);
    let dot = src[name_start..].rfind('.')? + name_start;
    Some(format!("{}@2x{}", &src[..dot], &src[dot..]))
}

/// Whether a path's stem carries the `@2x` suffix (dimensions are doubled).
pub fn is_hidpi(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|s| s.ends_with("@2x"))
}
