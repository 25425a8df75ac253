//! Draft filtering for the scanned route set.

use rayon::prelude::*;

use super::PageRoute;
use super::markdown::MarkdownMetaExtractor;
use crate::debug;

/// Route set after draft filtering.
pub struct FilterResult {
    pub routes: Vec<PageRoute>,
    /// Number of drafts filtered out.
    pub draft_count: usize,
}

/// Drop routes whose frontmatter marks them `draft: true`.
///
/// Only the frontmatter is parsed here; the compile step re-reads the
/// full source. Unreadable files stay in and fail loudly later.
pub fn filter_drafts(routes: Vec<PageRoute>) -> FilterResult {
    let draft_flags: Vec<bool> = routes
        .par_iter()
        .map(|route| {
            std::fs::read_to_string(&route.source)
                .ok()
                .and_then(|content| {
                    MarkdownMetaExtractor
                        .extract_frontmatter(&content)
                        .ok()
                        .flatten()
                        .map(|(meta, _)| meta.draft)
                })
                .unwrap_or(false)
        })
        .collect();

    let mut kept = Vec::with_capacity(routes.len());
    let mut draft_count = 0;
    for (route, is_draft) in routes.into_iter().zip(draft_flags) {
        if is_draft {
            draft_count += 1;
            debug!("drafts"; "skipping {}", route.relative.display());
        } else {
            kept.push(route);
        }
    }

    FilterResult {
        routes: kept,
        draft_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::fs;

    fn route_for(dir: &std::path::Path, name: &str, content: &str) -> PageRoute {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        let mut config = test_parse_config("");
        config.build.content = dir.to_path_buf();
        PageRoute::new(path, &config)
    }

    #[test]
    fn test_drafts_are_filtered() {
        let dir = tempfile::tempdir().unwrap();
        let routes = vec![
            route_for(dir.path(), "kept.md", "---\ntitle: a\n---\nx"),
            route_for(dir.path(), "draft.md", "---\ntitle: b\ndraft: true\n---\nx"),
            route_for(dir.path(), "plain.md", "no frontmatter"),
        ];

        let result = filter_drafts(routes);
        assert_eq!(result.draft_count, 1);
        let names: Vec<_> = result
            .routes
            .iter()
            .map(|r| r.relative.to_string_lossy().into_owned())
            .collect();
        assert!(names.contains(&"kept.md".to_string()));
        assert!(names.contains(&"plain.md".to_string()));
        assert!(!names.contains(&"draft.md".to_string()));
    }
}
