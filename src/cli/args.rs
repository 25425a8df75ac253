//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// v8.dev site generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: v8dev.toml)
    #[arg(short = 'C', long, default_value = "v8dev.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build the site for production
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Print a content collection as JSON
    #[command(visible_alias = "q")]
    Query {
        /// Collection to print
        #[arg(value_enum, default_value = "all")]
        collection: QueryCollection,

        /// Include draft pages in the collection
        #[arg(short, long)]
        drafts: bool,
    },

    /// Backfill width/height on raw <img>/<video> lines in the content tree
    Fix {
        /// Write intrinsicsize="WxH" instead of width/height
        #[arg(long)]
        intrinsic: bool,
    },

    /// Migrate raw <figure> blocks back to Markdown image syntax
    Convert,

    /// Look up the redirect target for a legacy URL
    Redirect {
        /// Legacy URL (blogspot post or wiki page)
        url: String,
    },
}

/// Build options.
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(long)]
    pub clean: bool,

    /// Include draft pages in the build
    #[arg(short, long)]
    pub drafts: bool,

    /// Minify copied assets and generated XML
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false, overrides_with = "no_minify")]
    pub minify: Option<bool>,

    /// Disable minification (same as --minify=false)
    #[arg(long, overrides_with = "minify")]
    pub no_minify: bool,

    /// Enable feed generation
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub feed: Option<bool>,

    /// Enable sitemap generation
    #[arg(short = 'S', long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub sitemap: Option<bool>,
}

impl BuildArgs {
    /// Minify override from either `--minify[=<bool>]` or `--no-minify`.
    pub fn minify_override(&self) -> Option<bool> {
        if self.no_minify { Some(false) } else { self.minify }
    }
}

/// Content collections exposed through `query`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryCollection {
    /// Dated blog posts, newest first
    Posts,
    /// Feature explainers, newest first
    Features,
    /// Posts and features merged, newest first
    All,
    /// Unique tags across all pages, sorted
    Tags,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_build_flag_parsing() {
        let cli = Cli::parse_from(["v8dev", "build", "--drafts", "--no-minify"]);
        let Commands::Build { build_args } = &cli.command else {
            panic!("expected build command");
        };
        assert!(build_args.drafts);
        assert_eq!(build_args.minify_override(), Some(false));
        assert_eq!(build_args.feed, None);
    }

    #[test]
    fn test_minify_accepts_explicit_value() {
        let cli = Cli::parse_from(["v8dev", "build", "--minify=false"]);
        let Commands::Build { build_args } = &cli.command else {
            panic!("expected build command");
        };
        assert_eq!(build_args.minify_override(), Some(false));

        let cli = Cli::parse_from(["v8dev", "build", "--minify"]);
        let Commands::Build { build_args } = &cli.command else {
            panic!("expected build command");
        };
        assert_eq!(build_args.minify_override(), Some(true));
    }

    #[test]
    fn test_query_defaults_to_all() {
        let cli = Cli::parse_from(["v8dev", "query"]);
        let Commands::Query { collection, drafts } = &cli.command else {
            panic!("expected query command");
        };
        assert_eq!(*collection, QueryCollection::All);
        assert!(!drafts);
    }

    #[test]
    fn test_redirect_takes_url() {
        let cli = Cli::parse_from(["v8dev", "redirect", "https://v8project.blogspot.com/"]);
        let Commands::Redirect { url } = &cli.command else {
            panic!("expected redirect command");
        };
        assert_eq!(url, "https://v8project.blogspot.com/");
    }
}
