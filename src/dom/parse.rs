//! HTML fragment parsing via `tl`.
//!
//! Raw HTML embedded in markdown (figure blocks, video embeds, table
//! wrappers) is parsed into owned tree nodes so the transform passes see
//! one uniform structure. Entities are decoded on the way in; the renderer
//! re-encodes on the way out.

use super::{Attrs, Element, Node, Text};
use crate::utils::html::{is_raw_text_element, unescape};

/// Parse an HTML fragment into tree nodes.
///
/// Unbalanced fragments are tolerated: `tl` auto-closes open tags at the
/// end of input. Comments are dropped.
pub fn parse_fragment(html: &str) -> Vec<Node> {
    let Ok(dom) = tl::parse(html, tl::ParserOptions::default()) else {
        // Parse failed, keep the source verbatim
        return vec![Node::Text(Text::raw(html.to_string()))];
    };

    let parser = dom.parser();
    let mut nodes = Vec::new();
    for handle in dom.children() {
        if let Some(node) = tl_node_to_tree(*handle, parser, false) {
            nodes.push(node);
        }
    }
    nodes
}

/// Convert a tl node handle to an owned tree node.
///
/// `raw_context` is true inside script/style, where entity references have
/// no meaning and the source text must survive byte for byte.
fn tl_node_to_tree(handle: tl::NodeHandle, parser: &tl::Parser, raw_context: bool) -> Option<Node> {
    let node = handle.get(parser)?;

    match node {
        tl::Node::Tag(tag) => {
            let tag_name = tag.name().as_utf8_str().to_lowercase();

            // Collect attributes (decoded)
            let mut attrs = Attrs::new();
            for (key, value) in tag.attributes().iter() {
                let value = value.map(|v| v.to_string()).unwrap_or_default();
                attrs.set(key.as_ref(), &unescape(&value));
            }

            let mut elem = Element::with_attrs(tag_name, attrs);

            let child_raw = raw_context || is_raw_text_element(&elem.tag);
            for child_handle in tag.children().top().iter() {
                if let Some(child) = tl_node_to_tree(*child_handle, parser, child_raw) {
                    elem.children.push(child);
                }
            }

            Some(Node::Element(Box::new(elem)))
        }
        tl::Node::Raw(bytes) => {
            let text = bytes.as_utf8_str();
            // Skip whitespace-only text between tags
            if text.trim().is_empty() {
                return None;
            }
            if raw_context {
                Some(Node::Text(Text::raw(text.to_string())))
            } else {
                Some(Node::Text(Text::new(unescape(&text).into_owned())))
            }
        }
        tl::Node::Comment(_) => None, // Skip comments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::render_nodes;

    #[test]
    fn test_parse_simple_element() {
        let nodes = parse_fragment(r#"<img src="/_img/v8.svg" alt="V8 logo">"#);
        assert_eq!(nodes.len(), 1);
        let Node::Element(img) = &nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(img.tag, "img");
        assert_eq!(img.get_attr("src"), Some("/_img/v8.svg"));
        assert_eq!(img.get_attr("alt"), Some("V8 logo"));
    }

    #[test]
    fn test_parse_nested_figure() {
        let html = r#"<figure><img src="/_img/a.png" alt=""><figcaption>Chart</figcaption></figure>"#;
        let nodes = parse_fragment(html);
        let Node::Element(figure) = &nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(figure.tag, "figure");
        assert_eq!(figure.children.len(), 2);
        assert_eq!(figure.text_content(), "Chart");
    }

    #[test]
    fn test_parse_decodes_entities() {
        let nodes = parse_fragment("<p>a &amp; b</p>");
        let Node::Element(p) = &nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(p.text_content(), "a & b");
        // Round-trips through the renderer
        assert_eq!(render_nodes(&nodes), "<p>a &amp; b</p>");
    }

    #[test]
    fn test_parse_decodes_attr_entities() {
        let nodes = parse_fragment(r#"<a href="/docs?a=1&amp;b=2">x</a>"#);
        let Node::Element(a) = &nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(a.get_attr("href"), Some("/docs?a=1&b=2"));
    }

    #[test]
    fn test_parse_drops_comments() {
        let nodes = parse_fragment("<!-- note --><p>x</p>");
        assert_eq!(nodes.len(), 1);
    }

    #[test]
    fn test_parse_lowercases_tag() {
        let nodes = parse_fragment("<DIV>x</DIV>");
        let Node::Element(div) = &nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(div.tag, "div");
    }

    #[test]
    fn test_parse_boolean_attr() {
        let nodes = parse_fragment(r#"<video src="/_img/demo.mp4" controls></video>"#);
        let Node::Element(video) = &nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(video.get_attr("controls"), Some(""));
    }
}
