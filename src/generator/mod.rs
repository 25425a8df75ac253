//! Per-build artifacts derived from compiled page metadata.
//!
//! - **Feed**: Atom or RSS feed for blog posts
//! - **Sitemap**: `sitemap.xml` over all stored pages
//! - **Filters**: date/URL/markdown helpers shared by the shell and feed
//!
//! All generators read the page store populated during compilation, so
//! they run after the compile pass without touching the source tree.

pub mod feed;
pub mod filters;
pub mod sitemap;

use std::borrow::Cow;

/// Minify XML content if enabled.
pub fn minify_xml(content: &[u8], enabled: bool) -> Cow<'_, [u8]> {
    if enabled {
        let xml_str = std::str::from_utf8(content).unwrap_or("");
        let minified = xml_str
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("");
        Cow::Owned(minified.into_bytes())
    } else {
        Cow::Borrowed(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_xml_basic() {
        let xml = br#"<?xml version="1.0"?>
<urlset>
  <url>https://v8.dev/</url>
</urlset>"#;
        let result = minify_xml(xml, true);

        assert_eq!(
            &*result,
            br#"<?xml version="1.0"?><urlset><url>https://v8.dev/</url></urlset>"#
        );
    }

    #[test]
    fn test_minify_xml_removes_empty_lines() {
        let xml = b"<root>\n\n  <item/>\n\n</root>";
        let result = minify_xml(xml, true);

        assert_eq!(&*result, b"<root><item/></root>");
    }

    #[test]
    fn test_minify_xml_disabled_passes_through() {
        let xml = b"<root>\n  <item/>\n</root>";

        let minified = minify_xml(xml, true);
        let not_minified = minify_xml(xml, false);

        assert_eq!(&*minified, b"<root><item/></root>");
        assert_eq!(&*not_minified, xml.as_slice());
    }
}
