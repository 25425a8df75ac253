//! Command-line interface: argument definitions and command drivers.

mod args;

pub mod build;
pub mod common;
pub mod convert;
pub mod fix;
pub mod query;
pub mod redirect;

pub use args::{BuildArgs, Cli, Commands, QueryCollection};
