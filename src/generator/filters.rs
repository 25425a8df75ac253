//! Presentation filters shared by the shell, feed, and `query` output.

use std::borrow::Cow;
use std::path::Path;

use crate::compiler::markdown::{MarkdownOptions, from_markdown};
use crate::config::SiteConfig;
use crate::dom::{Node, render_nodes};
use crate::utils::date::DateTimeUtc;
use crate::utils::html;

/// Strip the trailing slash for display.
///
/// The site root stays untouched in both its absolute and relative
/// spelling, everything else loses one trailing `/`.
pub fn clean_url<'a>(url: &'a str, config: &SiteConfig) -> &'a str {
    if url == "/" {
        return url;
    }
    if let Some(base) = config.site.base_url()
        && (url == base || url.strip_suffix('/') == Some(base))
    {
        return url;
    }
    url.strip_suffix('/').unwrap_or(url)
}

/// Post header date: "11 February 2019".
pub fn readable_date(date: &str) -> Option<String> {
    DateTimeUtc::parse(date).map(DateTimeUtc::to_readable)
}

/// `<time datetime>` value: "2019-02-11".
pub fn html_date_string(date: &str) -> Option<String> {
    DateTimeUtc::parse(date).map(DateTimeUtc::to_html_date)
}

/// First `n` items of a collection.
pub fn head<T>(items: &[T], n: usize) -> &[T] {
    &items[..n.min(items.len())]
}

/// Render a one-line markdown snippet without the wrapping paragraph.
///
/// Author fields carry markdown links ("[Mathias Bynens](https://...)").
/// A snippet that fails to parse falls back to its escaped text.
pub fn markdown_inline(text: &str) -> String {
    let options = MarkdownOptions {
        breaks: false,
        ..MarkdownOptions::default()
    };
    let Ok(doc) = from_markdown(text, &options, Path::new("<inline>")) else {
        return html::escape(text).into_owned();
    };
    let rendered = match doc.root.children.as_slice() {
        [Node::Element(p)] if p.tag == "p" => render_nodes(&p.children),
        children => render_nodes(children),
    };
    rendered.trim().to_string()
}

/// Decode HTML entities back to plain characters.
pub fn decode_html_entities(text: &str) -> Cow<'_, str> {
    html::unescape(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_clean_url_keeps_roots() {
        let config = test_parse_config("");
        assert_eq!(clean_url("/", &config), "/");
        assert_eq!(clean_url("https://v8.dev", &config), "https://v8.dev");
        assert_eq!(clean_url("https://v8.dev/", &config), "https://v8.dev/");
    }

    #[test]
    fn test_clean_url_strips_one_slash() {
        let config = test_parse_config("");
        assert_eq!(
            clean_url("https://v8.dev/blog/foo/", &config),
            "https://v8.dev/blog/foo"
        );
        assert_eq!(clean_url("/docs/ignition/", &config), "/docs/ignition");
        assert_eq!(clean_url("/about", &config), "/about");
    }

    #[test]
    fn test_clean_url_without_site_url() {
        let config = SiteConfig::default();
        assert_eq!(clean_url("/blog/", &config), "/blog");
        assert_eq!(clean_url("/", &config), "/");
    }

    #[test]
    fn test_readable_date() {
        assert_eq!(
            readable_date("2019-02-11").as_deref(),
            Some("11 February 2019")
        );
        assert_eq!(
            readable_date("2018-11-12 16:45:07").as_deref(),
            Some("12 November 2018")
        );
        assert_eq!(readable_date("soon"), None);
    }

    #[test]
    fn test_html_date_string() {
        assert_eq!(
            html_date_string("2018-11-12 16:45:07").as_deref(),
            Some("2018-11-12")
        );
        assert_eq!(html_date_string(""), None);
    }

    #[test]
    fn test_head_clamps_to_length() {
        let items = [1, 2, 3];
        assert_eq!(head(&items, 2), &[1, 2]);
        assert_eq!(head(&items, 10), &[1, 2, 3]);
        assert!(head(&items, 0).is_empty());
    }

    #[test]
    fn test_markdown_inline_unwraps_paragraph() {
        assert_eq!(
            markdown_inline("[Mathias Bynens](https://twitter.com/mathias)"),
            "<a href=\"https://twitter.com/mathias\">Mathias Bynens</a>"
        );
        assert_eq!(markdown_inline("plain *text*"), "plain <em>text</em>");
    }

    #[test]
    fn test_decode_html_entities() {
        assert_eq!(decode_html_entities("V8&rsquo;s parser"), "V8\u{2019}s parser");
        assert_eq!(decode_html_entities("no entities"), "no entities");
    }
}
