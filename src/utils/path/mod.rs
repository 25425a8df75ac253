//! Path helpers.

mod fs;
pub mod slug;

pub use fs::normalize_path;
