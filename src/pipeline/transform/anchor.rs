//! Heading anchors.

use anyhow::Result;
use rustc_hash::FxHashSet;

use crate::dom::{Attrs, Document, Element, Node};
use crate::pipeline::Transform;
use crate::utils::path::slug::slugify;

const ANCHOR_LEVELS: &[&str] = &["h2", "h3", "h4", "h5", "h6"];

/// Gives `h2`-`h6` headings a slug id and an appended `#` bookmark link.
/// Duplicate heading texts get `-1`, `-2`, ... suffixes.
pub struct AnchorTransform;

impl Transform for AnchorTransform {
    fn transform(&self, doc: &mut Document) -> Result<()> {
        let mut used = FxHashSet::default();
        visit(&mut doc.root, &mut used);
        Ok(())
    }
}

fn visit(elem: &mut Element, used: &mut FxHashSet<String>) {
    if ANCHOR_LEVELS.contains(&elem.tag.as_str()) {
        anchor_heading(elem, used);
        return;
    }
    for child in &mut elem.children {
        if let Node::Element(child_elem) = child {
            visit(child_elem, used);
        }
    }
}

fn anchor_heading(heading: &mut Element, used: &mut FxHashSet<String>) {
    let id = unique_slug(&slugify(&heading.text_content()), used);
    let href = format!("#{id}");

    let mut link = Element::with_attrs(
        "a",
        Attrs::from([("class", "bookmark"), ("href", href.as_str())]),
    );
    link.push_text("#");

    heading.set_attr("id", &id);
    heading.push_text(" ");
    heading.push_elem(link);
}

fn unique_slug(base: &str, used: &mut FxHashSet<String>) -> String {
    let mut candidate = base.to_string();
    let mut counter = 1;
    while !used.insert(candidate.clone()) {
        candidate = format!("{base}-{counter}");
        counter += 1;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::render_nodes;

    fn transform(root: Element) -> String {
        let mut doc = Document::new(root);
        AnchorTransform.transform(&mut doc).unwrap();
        render_nodes(&doc.root.children)
    }

    fn heading(tag: &str, text: &str) -> Element {
        let mut h = Element::new(tag);
        h.push_text(text);
        h
    }

    #[test]
    fn test_heading_gets_id_and_bookmark() {
        let mut root = Element::new("article");
        root.push_elem(heading("h2", "Lazy parsing"));

        assert_eq!(
            transform(root),
            "<h2 id=\"lazy-parsing\">Lazy parsing \
             <a class=\"bookmark\" href=\"#lazy-parsing\">#</a></h2>"
        );
    }

    #[test]
    fn test_h1_is_left_alone() {
        let mut root = Element::new("article");
        root.push_elem(heading("h1", "Title"));
        assert_eq!(transform(root), "<h1>Title</h1>");
    }

    #[test]
    fn test_duplicate_headings_get_suffixes() {
        let mut root = Element::new("article");
        root.push_elem(heading("h2", "Setup"));
        root.push_elem(heading("h3", "Setup"));
        root.push_elem(heading("h2", "Setup"));

        let html = transform(root);
        assert!(html.contains("<h2 id=\"setup\">"));
        assert!(html.contains("<h3 id=\"setup-1\">"));
        assert!(html.contains("<h2 id=\"setup-2\">"));
    }

    #[test]
    fn test_headings_inside_containers_are_anchored() {
        let mut note = Element::with_attrs("div", Attrs::from([("class", "note")]));
        note.push_elem(heading("h3", "Caveats"));
        let mut root = Element::new("article");
        root.push_elem(note);

        assert!(transform(root).contains("<h3 id=\"caveats\">"));
    }

    #[test]
    fn test_inline_code_contributes_to_slug() {
        let mut h = Element::new("h2");
        h.push_text("The ");
        let mut code = Element::new("code");
        code.push_text("DataView");
        h.push_elem(code);
        h.push_text(" API");
        let mut root = Element::new("article");
        root.push_elem(h);

        assert!(transform(root).contains("id=\"the-dataview-api\""));
    }
}
