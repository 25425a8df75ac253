//! Single-page compilation from markdown source to final HTML.

use std::fs;

use anyhow::{Context, Result};

use super::markdown::{MarkdownMetaExtractor, MarkdownOptions, from_markdown};
use super::{PageRoute, shell};
use crate::config::SiteConfig;
use crate::dom::render_document;
use crate::page::PageMeta;
use crate::pipeline;
use crate::support;

/// A page compiled to its final HTML string.
#[derive(Debug)]
pub struct CompiledPage {
    pub meta: PageMeta,
    pub html: String,
}

/// Compile one markdown source into a full HTML page.
pub fn compile_page(route: &PageRoute, config: &SiteConfig) -> Result<CompiledPage> {
    let source = fs::read_to_string(&route.source)
        .with_context(|| format!("failed to read {}", route.source.display()))?;

    let (meta, body) = match MarkdownMetaExtractor.extract_frontmatter(&source)? {
        Some((meta, body)) => (meta, body.to_string()),
        None => (PageMeta::default(), source),
    };

    // Support matrices expand in the raw text, before markdown parsing
    let expanded = support::expand(&body, &route.source)?;

    let options = MarkdownOptions {
        breaks: config.build.breaks,
        ..MarkdownOptions::default()
    };
    let mut doc = from_markdown(&expanded, &options, &route.source)?;

    pipeline::compile(&mut doc, route, config)?;

    let page = shell::wrap(doc, &meta, route, config);
    let html = render_document(&page);

    Ok(CompiledPage { meta, html })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::path::Path;

    fn write_png(dir: &Path, name: &str, w: u32, h: u32) {
        fs::create_dir_all(dir.join("_img")).unwrap();
        image::RgbaImage::new(w, h)
            .save(dir.join("_img").join(name))
            .unwrap();
    }

    #[test]
    fn test_compile_page_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("blog")).unwrap();
        write_png(dir.path(), "graph.png", 640, 480);

        let source = dir.path().join("blog/liftoff.md");
        fs::write(
            &source,
            concat!(
                "---\n",
                "title: Liftoff\n",
                "description: Baseline compiler\n",
                "---\n",
                "## Design\n\n",
                "![Pipeline overview](/_img/graph.png)\n\n",
                "```torque\nlet x;\n```\n"
            ),
        )
        .unwrap();

        let mut config = test_parse_config("");
        config.build.content = dir.path().to_path_buf();

        let route = PageRoute::new(source, &config);
        assert_eq!(route.permalink.as_str(), "/blog/liftoff/");

        let page = compile_page(&route, &config).unwrap();
        assert_eq!(page.meta.title.as_deref(), Some("Liftoff"));

        let html = &page.html;
        assert!(html.contains("<title>Liftoff · V8</title>"));
        assert!(html.contains(
            "<h2 id=\"design\">Design <a class=\"bookmark\" href=\"#design\">#</a></h2>"
        ));
        assert!(html.contains("width=\"640\" height=\"480\" loading=\"lazy\""));
        assert!(html.contains("<figcaption>Pipeline overview</figcaption>"));
        assert!(html.contains("<span class=\"token keyword\">let</span>"));
    }

    #[test]
    fn test_image_in_running_prose_fails_naming_the_source() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "inline.png", 4, 4);

        let source = dir.path().join("docs.md");
        fs::write(&source, "See ![icon](/_img/inline.png) here.\n").unwrap();

        let mut config = test_parse_config("");
        config.build.content = dir.path().to_path_buf();

        let route = PageRoute::new(source, &config);
        let err = compile_page(&route, &config).unwrap_err();
        assert!(format!("{err:#}").contains("/_img/inline.png"));
    }
}
