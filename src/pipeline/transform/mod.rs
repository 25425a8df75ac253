//! Individual document transforms.

mod anchor;
mod code;
mod figure;
mod media;
mod svg;

pub use anchor::AnchorTransform;
pub use code::CodeTransform;
pub use figure::FigureTransform;
pub use media::MediaTransform;
pub use svg::SvgTransform;
