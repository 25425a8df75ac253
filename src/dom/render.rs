//! HTML serialization.
//!
//! Output conventions follow what browsers and validators accept for the
//! site's markup:
//! - attributes always render as `name="value"`, empty values included
//! - void elements emit no closing tag
//! - `script`/`style` children are written verbatim

use super::{Document, Element, Node};
use crate::utils::html::{escape, escape_attr, is_raw_text_element, is_void_element};

/// Render a full document with doctype.
pub fn render_document(doc: &Document) -> String {
    let mut out = String::with_capacity(16 * 1024);
    out.push_str("<!doctype html>");
    render_element(&doc.root, &mut out);
    out.push('\n');
    out
}

/// Render a list of nodes without doctype (fragments, feed content).
pub fn render_nodes(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        render_node(node, &mut out, false);
    }
    out
}

fn render_element(elem: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&elem.tag);
    for (name, value) in elem.attrs.iter() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }
    out.push('>');

    if is_void_element(&elem.tag) {
        return;
    }

    let raw_context = is_raw_text_element(&elem.tag);
    for child in &elem.children {
        render_node(child, out, raw_context);
    }

    out.push_str("</");
    out.push_str(&elem.tag);
    out.push('>');
}

fn render_node(node: &Node, out: &mut String, raw_context: bool) {
    match node {
        Node::Element(elem) => render_element(elem, out),
        Node::Text(text) => {
            if raw_context || text.raw {
                out.push_str(&text.content);
            } else {
                out.push_str(&escape(&text.content));
            }
        }
    }
}
