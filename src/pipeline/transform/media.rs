//! Image validation and dimension embedding.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use crate::compiler::PageRoute;
use crate::config::SiteConfig;
use crate::dom::{Document, Element, Node};
use crate::media;
use crate::pipeline::Transform;

/// Prefix every self-hosted media source must carry.
const IMG_PREFIX: &str = "/_img/";

/// Validates image placement and embeds probed dimensions.
///
/// Every `img` inside a paragraph must be the paragraph's only
/// non-whitespace child. Bitmap sources under `/_img/` get `width`,
/// `height`, `loading="lazy"`, and a `2x` srcset when the `@2x` variant
/// exists on disk. Any other source prefix is a build error.
pub struct MediaTransform<'a> {
    config: &'a SiteConfig,
    route: &'a PageRoute,
}

impl<'a> MediaTransform<'a> {
    pub fn new(config: &'a SiteConfig, route: &'a PageRoute) -> Self {
        Self { config, route }
    }

    fn visit(&self, elem: &mut Element) -> Result<()> {
        if elem.tag == "p" {
            self.check_paragraph(elem)?;
        } else if elem.tag == "img" {
            self.augment_image(elem)?;
        }
        for child in &mut elem.children {
            if let Node::Element(child_elem) = child {
                self.visit(child_elem)?;
            }
        }
        Ok(())
    }

    /// An image interleaved with inline prose aborts the build.
    fn check_paragraph(&self, paragraph: &Element) -> Result<()> {
        if !paragraph.children.iter().any(is_img) {
            return Ok(());
        }
        let mixed = paragraph
            .children
            .iter()
            .any(|node| !is_img(node) && !node.is_whitespace());
        if mixed {
            let src = paragraph
                .children
                .iter()
                .filter_map(Node::as_element)
                .find(|elem| elem.tag == "img")
                .and_then(|img| img.get_attr("src"))
                .unwrap_or("?");
            bail!(
                "image '{src}' mixed with inline content in {}; images must stand alone in their paragraph",
                self.route.source.display()
            );
        }
        Ok(())
    }

    fn augment_image(&self, image: &mut Element) -> Result<()> {
        let Some(src) = image.get_attr("src").map(str::to_owned) else {
            bail!("image without src in {}", self.route.source.display());
        };
        if !src.starts_with(IMG_PREFIX) {
            bail!(
                "image source '{src}' outside {IMG_PREFIX} in {}; media must be self-hosted",
                self.route.source.display()
            );
        }

        // Vectors are inlined later and carry no pixel dimensions
        if src.ends_with(".svg") {
            return Ok(());
        }
        // Raw HTML images may already carry dimensions
        if image.get_attr("width").is_some() {
            return Ok(());
        }

        let file = self.asset_path(&src);
        let (width, height) = media::probe_dimensions(&file).with_context(|| {
            format!(
                "failed to probe {} referenced in {}",
                file.display(),
                self.route.source.display()
            )
        })?;
        image.set_attr("width", &width.to_string());
        image.set_attr("height", &height.to_string());
        image.set_attr("loading", "lazy");

        if let Some(variant) = media::hidpi_variant(&src)
            && self.asset_path(&variant).exists()
        {
            image.set_attr("srcset", &format!("{variant} 2x"));
        }
        Ok(())
    }

    /// `/_img/foo.png` resolved under the content root.
    fn asset_path(&self, src: &str) -> PathBuf {
        self.config.build.content.join(src.trim_start_matches('/'))
    }
}

fn is_img(node: &Node) -> bool {
    node.as_element().is_some_and(|elem| elem.tag == "img")
}

impl Transform for MediaTransform<'_> {
    fn transform(&self, doc: &mut Document) -> Result<()> {
        self.visit(&mut doc.root)
    }
}
