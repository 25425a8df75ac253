//! Page types: metadata, sections, and storage.

mod kind;
mod meta;
mod store;

pub use kind::PageKind;
pub use meta::PageMeta;
pub use store::{STORED_PAGES, StoredPage};

/// A JSON object map for storing arbitrary metadata fields.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
