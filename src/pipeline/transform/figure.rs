//! Implicit figure wrapping for standalone images.

use anyhow::Result;

use crate::dom::{Document, Element, Node};
use crate::pipeline::Transform;

/// Wraps paragraphs holding a lone image in a `figure`.
///
/// The image's alt text moves into a `figcaption` when non-empty, leaving
/// `alt=""` behind so readers don't get the caption twice. Inside an
/// explicit figure the paragraph is unwrapped instead, leaving the
/// container's own caption in charge.
pub struct FigureTransform;

impl FigureTransform {
    fn visit(&self, elem: &mut Element) {
        let inside_figure = elem.tag == "figure";
        for child in &mut elem.children {
            let Node::Element(child_elem) = child else {
                continue;
            };
            if let Some(replacement) = rewrap(child_elem, inside_figure) {
                *child = replacement;
            } else {
                self.visit(child_elem);
            }
        }
    }
}

/// A `p` whose only non-whitespace child is an `img` becomes a figure,
/// or a bare image when the parent already is one.
fn rewrap(paragraph: &Element, parent_is_figure: bool) -> Option<Node> {
    if paragraph.tag != "p" {
        return None;
    }
    let mut content = paragraph
        .children
        .iter()
        .filter(|node| !node.is_whitespace());
    let image = content.next()?.as_element()?;
    if image.tag != "img" || content.next().is_some() {
        return None;
    }
    let mut image = image.clone();

    if parent_is_figure {
        return Some(Node::Element(Box::new(image)));
    }

    let caption = image.get_attr("alt").unwrap_or_default().to_string();
    let mut figure = Element::new("figure");
    if caption.is_empty() {
        figure.push_elem(image);
    } else {
        image.set_attr("alt", "");
        figure.push_elem(image);
        let mut figcaption = Element::new("figcaption");
        figcaption.push_text(&caption);
        figure.push_elem(figcaption);
    }
    Some(Node::Element(Box::new(figure)))
}

impl Transform for FigureTransform {
    fn transform(&self, doc: &mut Document) -> Result<()> {
        self.visit(&mut doc.root);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Attrs, render_nodes};

    fn doc_with(children: Vec<Node>) -> Document {
        let mut root = Element::new("article");
        root.children = children;
        Document::new(root)
    }

    fn img(src: &str, alt: &str) -> Element {
        Element::with_attrs("img", Attrs::from([("src", src), ("alt", alt)]))
    }

    fn p_with(image: Element) -> Node {
        let mut p = Element::new("p");
        p.push_elem(image);
        Node::Element(Box::new(p))
    }

    #[test]
    fn test_alt_text_moves_into_figcaption() {
        let mut doc = doc_with(vec![p_with(img("/_img/a.png", "A chart"))]);
        FigureTransform.transform(&mut doc).unwrap();
        assert_eq!(
            render_nodes(&doc.root.children),
            "<figure><img src=\"/_img/a.png\" alt=\"\">\
             <figcaption>A chart</figcaption></figure>"
        );
    }

    #[test]
    fn test_empty_alt_means_no_figcaption() {
        let mut doc = doc_with(vec![p_with(img("/_img/a.png", ""))]);
        FigureTransform.transform(&mut doc).unwrap();
        assert_eq!(
            render_nodes(&doc.root.children),
            "<figure><img src=\"/_img/a.png\" alt=\"\"></figure>"
        );
    }

    #[test]
    fn test_paragraph_inside_explicit_figure_is_unwrapped() {
        let mut figure = Element::new("figure");
        figure.push(p_with(img("/_img/a.png", "ignored")));
        let mut figcaption = Element::new("figcaption");
        figcaption.push_text("The real caption");
        figure.push_elem(figcaption);
        let mut doc = doc_with(vec![Node::Element(Box::new(figure))]);

        FigureTransform.transform(&mut doc).unwrap();
        assert_eq!(
            render_nodes(&doc.root.children),
            "<figure><img src=\"/_img/a.png\" alt=\"ignored\">\
             <figcaption>The real caption</figcaption></figure>"
        );
    }

    #[test]
    fn test_prose_paragraph_is_untouched() {
        let mut p = Element::new("p");
        p.push_text("just words");
        let mut doc = doc_with(vec![Node::Element(Box::new(p))]);
        FigureTransform.transform(&mut doc).unwrap();
        assert_eq!(render_nodes(&doc.root.children), "<p>just words</p>");
    }

    #[test]
    fn test_two_images_stay_in_paragraph() {
        let mut p = Element::new("p");
        p.push_elem(img("/_img/a.png", ""));
        p.push_elem(img("/_img/b.png", ""));
        let mut doc = doc_with(vec![Node::Element(Box::new(p))]);
        FigureTransform.transform(&mut doc).unwrap();
        assert!(render_nodes(&doc.root.children).starts_with("<p>"));
    }
}
