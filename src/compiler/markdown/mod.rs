//! Markdown processing: frontmatter, containers, tree conversion.

pub mod container;
mod convert;
mod frontmatter;

pub use convert::{MarkdownOptions, from_markdown};
pub use frontmatter::MarkdownMetaExtractor;
