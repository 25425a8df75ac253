//! Content compilation: scan, filter, compile, write.

pub mod compile;
pub mod filter;
pub mod markdown;
pub mod shell;
pub mod write;

use std::path::{Path, PathBuf};

use jwalk::WalkDir;

use crate::config::SiteConfig;
use crate::core::UrlPath;
use crate::debug;

pub use compile::{CompiledPage, compile_page};
pub use filter::{FilterResult, filter_drafts};
pub use write::write_page;

/// Files to ignore during traversal.
const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Source-to-output mapping for one content page.
#[derive(Debug, Clone)]
pub struct PageRoute {
    /// Path to the markdown source.
    pub source: PathBuf,
    /// Path relative to the content root.
    pub relative: PathBuf,
    /// Pretty URL (`blog/dataview.md` becomes `/blog/dataview/`).
    pub permalink: UrlPath,
    /// Output file (`dist/blog/dataview/index.html`).
    pub output_file: PathBuf,
}

impl PageRoute {
    pub fn new(source: PathBuf, config: &SiteConfig) -> Self {
        let relative = config.content_relative(&source);
        let permalink = UrlPath::from_content_path(&relative);
        let output_file = output_file_for(&permalink, &config.build.output);
        Self {
            source,
            relative,
            permalink,
            output_file,
        }
    }
}

fn output_file_for(permalink: &UrlPath, output: &Path) -> PathBuf {
    let relative = permalink.as_str().trim_start_matches('/');
    output.join(relative).join("index.html")
}

/// Content tree split into pages and static assets.
pub struct ContentScan {
    pub routes: Vec<PageRoute>,
    pub assets: Vec<PathBuf>,
}

/// Scan the content tree into markdown page routes and asset files.
pub fn scan_content(config: &SiteConfig) -> ContentScan {
    let mut routes = Vec::new();
    let mut assets = Vec::new();

    for path in collect_all_files(&config.build.content) {
        let relative = config.content_relative(&path);
        if config.build.assets.contains(&relative) {
            assets.push(path);
        } else if path.extension().is_some_and(|ext| ext == "md") {
            routes.push(PageRoute::new(path, config));
        } else {
            debug!("scan"; "ignoring {}", relative.display());
        }
    }

    // Deterministic compile order for stable logs
    routes.sort_by(|a, b| a.relative.cmp(&b.relative));
    ContentScan { routes, assets }
}

/// Collect all files from a directory recursively.
pub fn collect_all_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            let name = entry.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(|entry| entry.path())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::fs;

    #[test]
    fn test_page_route_mapping() {
        let mut config = test_parse_config("");
        config.build.content = PathBuf::from("/site/src");
        config.build.output = PathBuf::from("/site/dist");

        let route = PageRoute::new(PathBuf::from("/site/src/blog/dataview.md"), &config);
        assert_eq!(route.relative, PathBuf::from("blog/dataview.md"));
        assert_eq!(route.permalink.as_str(), "/blog/dataview/");
        assert_eq!(
            route.output_file,
            PathBuf::from("/site/dist/blog/dataview/index.html")
        );
    }

    #[test]
    fn test_index_route_maps_to_directory() {
        let mut config = test_parse_config("");
        config.build.content = PathBuf::from("/site/src");
        config.build.output = PathBuf::from("/site/dist");

        let root = PageRoute::new(PathBuf::from("/site/src/index.md"), &config);
        assert_eq!(root.permalink.as_str(), "/");
        assert_eq!(root.output_file, PathBuf::from("/site/dist/index.html"));

        let section = PageRoute::new(PathBuf::from("/site/src/docs/index.md"), &config);
        assert_eq!(section.permalink.as_str(), "/docs/");
        assert_eq!(
            section.output_file,
            PathBuf::from("/site/dist/docs/index.html")
        );
    }

    #[test]
    fn test_scan_content_partitions_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("blog")).unwrap();
        fs::create_dir_all(dir.path().join("_img")).unwrap();
        fs::write(dir.path().join("blog/a.md"), "x").unwrap();
        fs::write(dir.path().join("index.md"), "x").unwrap();
        fs::write(dir.path().join("_img/chart.png"), [0u8; 4]).unwrap();
        fs::write(dir.path().join("favicon.ico"), [0u8; 4]).unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();

        let mut config = test_parse_config("");
        config.build.content = dir.path().to_path_buf();

        let scan = scan_content(&config);
        let permalinks: Vec<_> = scan
            .routes
            .iter()
            .map(|r| r.permalink.as_str().to_string())
            .collect();
        assert_eq!(permalinks, vec!["/blog/a/", "/"]);

        let assets: Vec<_> = scan
            .assets
            .iter()
            .map(|p| config.content_relative(p))
            .collect();
        assert!(assets.contains(&PathBuf::from("_img/chart.png")));
        assert!(assets.contains(&PathBuf::from("favicon.ico")));
        // Stray non-markdown files are neither pages nor assets
        assert!(!assets.contains(&PathBuf::from("notes.txt")));
    }

    #[test]
    fn test_collect_skips_ignored_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".DS_Store"), "x").unwrap();
        fs::write(dir.path().join("real.md"), "x").unwrap();

        let files = collect_all_files(dir.path());
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("real.md"));
    }
}
