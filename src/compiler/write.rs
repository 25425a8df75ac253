//! Output writing for compiled pages.

use std::fs;

use anyhow::{Context, Result};

use super::PageRoute;

/// Write a page's rendered HTML to its pretty-URL location
/// (`/blog/liftoff/` lands in `blog/liftoff/index.html`).
pub fn write_page(route: &PageRoute, html: &str) -> Result<()> {
    if let Some(parent) = route.output_file.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(&route.output_file, html)
        .with_context(|| format!("failed to write {}", route.output_file.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::UrlPath;
    use std::path::PathBuf;

    #[test]
    fn test_write_page_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let route = PageRoute {
            source: PathBuf::from("src/blog/test.md"),
            relative: PathBuf::from("blog/test.md"),
            permalink: UrlPath::from("/blog/test/"),
            output_file: dir.path().join("blog/test/index.html"),
        };

        write_page(&route, "<!doctype html>\n<html></html>").unwrap();
        let written = std::fs::read_to_string(dir.path().join("blog/test/index.html")).unwrap();
        assert!(written.starts_with("<!doctype html>"));
    }
}
