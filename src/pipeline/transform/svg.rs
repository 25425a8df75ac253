//! Inline SVG embedding.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};

use crate::compiler::PageRoute;
use crate::config::SiteConfig;
use crate::dom::{Document, Element, Node, Text};
use crate::pipeline::Transform;

/// Replaces `img` references to `/_img/*.svg` with the vector markup
/// itself, read from the content tree. Missing or malformed files
/// abort the build.
pub struct SvgTransform<'a> {
    config: &'a SiteConfig,
    route: &'a PageRoute,
}

impl<'a> SvgTransform<'a> {
    pub fn new(config: &'a SiteConfig, route: &'a PageRoute) -> Self {
        Self { config, route }
    }

    fn visit(&self, elem: &mut Element) -> Result<()> {
        for child in &mut elem.children {
            let Node::Element(child_elem) = child else {
                continue;
            };
            if is_svg_image(child_elem) {
                *child = self.inline_svg(child_elem)?;
            } else {
                self.visit(child_elem)?;
            }
        }
        Ok(())
    }

    fn inline_svg(&self, image: &Element) -> Result<Node> {
        let src = image.get_attr("src").unwrap_or_default();
        let file = self.asset_path(src);
        let content = fs::read_to_string(&file).with_context(|| {
            format!(
                "failed to read {} referenced in {}",
                file.display(),
                self.route.source.display()
            )
        })?;
        let markup = svg_markup(&content)
            .ok_or_else(|| anyhow!("no <svg> element in {}", file.display()))?;
        Ok(Node::Text(Text::raw(markup)))
    }

    fn asset_path(&self, src: &str) -> PathBuf {
        self.config.build.content.join(src.trim_start_matches('/'))
    }
}

fn is_svg_image(elem: &Element) -> bool {
    elem.tag == "img"
        && elem
            .get_attr("src")
            .is_some_and(|src| src.starts_with("/_img/") && src.ends_with(".svg"))
}

/// The `<svg>..</svg>` slice of a file, dropping any XML prologue.
fn svg_markup(content: &str) -> Option<&str> {
    let start = content.find("<svg")?;
    let end = content.rfind("</svg>")? + "</svg>".len();
    content.get(start..end)
}

impl Transform for SvgTransform<'_> {
    fn transform(&self, doc: &mut Document) -> Result<()> {
        self.visit(&mut doc.root)
    }
}
