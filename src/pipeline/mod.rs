//! Document processing pipeline.
//!
//! Transforms run over the parsed tree between markdown conversion and
//! shell wrapping. Order matters: image validation sees the markdown
//! shapes before figure wrapping rearranges them, and SVG inlining
//! expects the final figure structure.

pub mod transform;

use anyhow::Result;

use crate::compiler::PageRoute;
use crate::config::SiteConfig;
use crate::dom::Document;

pub use transform::{AnchorTransform, CodeTransform, FigureTransform, MediaTransform, SvgTransform};

/// A tree rewrite applied to a compiled document.
pub trait Transform {
    fn transform(&self, doc: &mut Document) -> Result<()>;
}

/// Run the full transform chain over one page's document.
pub fn compile(doc: &mut Document, route: &PageRoute, config: &SiteConfig) -> Result<()> {
    Pipeline::new(doc)
        .pipe(&AnchorTransform)?
        .pipe(&MediaTransform::new(config, route))?
        .pipe(&FigureTransform)?
        .pipe(&SvgTransform::new(config, route))?
        .pipe(&CodeTransform)?;
    Ok(())
}

/// Chains transforms over a mutable document.
pub struct Pipeline<'d> {
    doc: &'d mut Document,
}

impl<'d> Pipeline<'d> {
    pub fn new(doc: &'d mut Document) -> Self {
        Self { doc }
    }

    pub fn pipe(self, transform: &dyn Transform) -> Result<Self> {
        transform.transform(self.doc)?;
        Ok(self)
    }
}
