//! Static asset handling (copying, minification).

pub mod minify;
mod process;

pub use process::process_asset;
