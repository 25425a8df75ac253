//! Syntax highlighting and table cell tweaks for code blocks.

use anyhow::Result;

use crate::debug;
use crate::dom::{Document, Element, Node};
use crate::highlight;
use crate::pipeline::Transform;

/// Highlights fenced code blocks and tags table cells that hold
/// nothing but a code block, so stylesheets can drop cell padding.
pub struct CodeTransform;

impl CodeTransform {
    fn visit(&self, elem: &mut Element) {
        match elem.tag.as_str() {
            "td" | "th" if lone_pre_cell(elem) => add_class(elem, "td-with-just-pre"),
            "pre" => highlight_block(elem),
            _ => {}
        }
        for child in &mut elem.children {
            if let Node::Element(child_elem) = child {
                self.visit(child_elem);
            }
        }
    }
}

fn lone_pre_cell(cell: &Element) -> bool {
    let mut content = cell.children.iter().filter(|node| !node.is_whitespace());
    let only = content
        .next()
        .and_then(Node::as_element)
        .is_some_and(|child| child.tag == "pre");
    only && content.next().is_none()
}

fn add_class(elem: &mut Element, class: &str) {
    let merged = match elem.get_attr("class") {
        Some(existing) => format!("{existing} {class}"),
        None => class.to_string(),
    };
    elem.set_attr("class", &merged);
}

/// Replaces the text of `pre > code.language-*` with marked-up tokens
/// when a grammar for the language exists.
fn highlight_block(pre: &mut Element) {
    let Some(code) = pre
        .children
        .iter_mut()
        .find_map(|node| node.as_element_mut())
    else {
        return;
    };
    if code.tag != "code" {
        return;
    }
    let Some(lang) = code
        .get_attr("class")
        .and_then(|class| class.strip_prefix("language-"))
        .map(str::to_owned)
    else {
        return;
    };
    let source = code.text_content();
    if let Some(markup) = highlight::highlight(&source, &lang) {
        code.children.clear();
        code.push_raw(&markup);
    } else {
        debug!("highlight"; "no grammar for '{}' (have: {})", lang, highlight::supported().join(", "));
    }
}

impl Transform for CodeTransform {
    fn transform(&self, doc: &mut Document) -> Result<()> {
        self.visit(&mut doc.root);
        Ok(())
    }
}
