//! HTML document shell wrapped around compiled content.

use crate::config::SiteConfig;
use crate::core::UrlPath;
use crate::dom::{Attrs, Document, Element};
use crate::generator::filters::clean_url;
use crate::page::PageMeta;

use super::PageRoute;

/// Wrap article content in the site shell.
pub fn wrap(
    content: Document,
    meta: &PageMeta,
    route: &PageRoute,
    config: &SiteConfig,
) -> Document {
    let mut html = Element::with_attrs(
        "html",
        Attrs::from([("lang", config.site.language.as_str())]),
    );
    html.push_elem(build_head(meta, &route.permalink, config));

    let mut main = Element::new("main");
    main.push_elem(content.root);
    let mut body = Element::new("body");
    body.push_elem(main);
    html.push_elem(body);

    Document::new(html)
}

fn build_head(meta: &PageMeta, permalink: &UrlPath, config: &SiteConfig) -> Element {
    let mut head = Element::new("head");

    head.push_elem(Element::with_attrs("meta", Attrs::from([("charset", "utf-8")])));
    head.push_elem(Element::with_attrs(
        "meta",
        Attrs::from([
            ("name", "viewport"),
            ("content", "width=device-width, initial-scale=1"),
        ]),
    ));

    let mut title = Element::new("title");
    title.push_text(&page_title(meta, &config.site.title));
    head.push_elem(title);

    let description = meta
        .description
        .as_deref()
        .unwrap_or(&config.site.description);
    if !description.is_empty() {
        head.push_elem(Element::with_attrs(
            "meta",
            Attrs::from([("name", "description"), ("content", description)]),
        ));
    }

    if let Some(base) = config.site.base_url() {
        let canonical = format!("{base}{}", permalink.to_encoded());
        head.push_elem(Element::with_attrs(
            "link",
            Attrs::from([("rel", "canonical"), ("href", clean_url(&canonical, config))]),
        ));
    }

    head.push_elem(Element::with_attrs(
        "link",
        Attrs::from([("rel", "icon"), ("href", "/favicon.ico")]),
    ));
    head.push_elem(Element::with_attrs(
        "link",
        Attrs::from([("rel", "stylesheet"), ("href", "/_css/main.css")]),
    ));

    if config.build.feed.enable {
        let href = format!("/{}", config.build.feed.path);
        head.push_elem(Element::with_attrs(
            "link",
            Attrs::from([
                ("rel", "alternate"),
                ("type", config.build.feed.format.mime_type()),
                ("href", href.as_str()),
                ("title", config.site.title.as_str()),
            ]),
        ));
    }

    head.push_elem(Element::with_attrs(
        "script",
        Attrs::from([("type", "module"), ("src", "/_js/main.js")]),
    ));
    head.push_elem(Element::with_attrs(
        "script",
        Attrs::from([("nomodule", ""), ("defer", ""), ("src", "/_js/legacy.js")]),
    ));

    head
}

/// Page title joined with the site title.
fn page_title(meta: &PageMeta, site_title: &str) -> String {
    match meta.title.as_deref() {
        Some(title) if !title.is_empty() => format!("{title} · {site_title}"),
        _ => site_title.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::dom::render_document;
    use std::path::PathBuf;

    fn test_route(permalink: &str) -> PageRoute {
        PageRoute {
            source: PathBuf::from("src/blog/test.md"),
            relative: PathBuf::from("blog/test.md"),
            permalink: UrlPath::from(permalink),
            output_file: PathBuf::from("dist/blog/test/index.html"),
        }
    }

    fn wrap_empty(meta: &PageMeta, permalink: &str, config: &SiteConfig) -> String {
        let doc = Document::new(Element::new("article"));
        render_document(&wrap(doc, meta, &test_route(permalink), config))
    }

    #[test]
    fn test_wrap_produces_full_document() {
        let config = test_parse_config("");
        let meta = PageMeta {
            title: Some("Liftoff".into()),
            ..Default::default()
        };
        let html = wrap_empty(&meta, "/blog/liftoff/", &config);

        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains("<title>Liftoff · V8</title>"));
        assert!(html.contains("<link rel=\"canonical\" href=\"https://v8.dev/blog/liftoff\">"));
        assert!(html.contains(
            "<link rel=\"alternate\" type=\"application/atom+xml\" href=\"/blog.atom\" title=\"V8\">"
        ));
        assert!(html.contains("<script type=\"module\" src=\"/_js/main.js\"></script>"));
        assert!(html.contains("<script nomodule=\"\" defer=\"\" src=\"/_js/legacy.js\"></script>"));
        assert!(html.contains("<main><article></article></main>"));
    }

    #[test]
    fn test_home_page_title_and_canonical() {
        let config = test_parse_config("");
        let html = wrap_empty(&PageMeta::default(), "/", &config);

        assert!(html.contains("<title>V8</title>"));
        assert!(html.contains("<link rel=\"canonical\" href=\"https://v8.dev/\">"));
    }

    #[test]
    fn test_page_description_overrides_site() {
        let config = test_parse_config("");
        let meta = PageMeta {
            description: Some("Custom blurb".into()),
            ..Default::default()
        };
        let html = wrap_empty(&meta, "/docs/about/", &config);
        assert!(html.contains("<meta name=\"description\" content=\"Custom blurb\">"));

        let html = wrap_empty(&PageMeta::default(), "/docs/about/", &config);
        assert!(html.contains("<meta name=\"description\" content=\"Test\">"));
    }

    #[test]
    fn test_feed_link_absent_when_disabled() {
        let config = test_parse_config("[build.feed]\nenable = false\n");
        let html = wrap_empty(&PageMeta::default(), "/", &config);
        assert!(!html.contains("rel=\"alternate\""));
    }
}
