//! Build script for minifying the embedded browser scripts.

use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::mangler::MangleOptions;
use oxc::minifier::{CompressOptions, Minifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;
use std::fs;
use std::path::Path;

const ANALYTICS_PLACEHOLDER: &str = "__ANALYTICS_ID__";

fn main() {
    let out_dir = std::env::var("OUT_DIR").unwrap();
    let out_path = Path::new(&out_dir);

    minify_script("src/embed/js/main.js", &out_path.join("main.min.js"), true);
    minify_script(
        "src/embed/js/legacy.js",
        &out_path.join("legacy.min.js"),
        true,
    );
    minify_script(
        "src/embed/js/twitter-widget.js",
        &out_path.join("twitter-widget.min.js"),
        false,
    );

    println!("cargo:rerun-if-changed=src/embed/js/main.js");
    println!("cargo:rerun-if-changed=src/embed/js/legacy.js");
    println!("cargo:rerun-if-changed=src/embed/js/twitter-widget.js");
}

fn minify_script(input: &str, output: &Path, expects_analytics_id: bool) {
    let source = fs::read_to_string(input).expect("Failed to read JS file");
    if expects_analytics_id {
        let count = source.matches(ANALYTICS_PLACEHOLDER).count();
        assert_eq!(
            count, 1,
            "{} must contain exactly one {} placeholder",
            input, ANALYTICS_PLACEHOLDER
        );
    }
    let code = minify_js(&source);
    fs::write(output, code).expect("Failed to write minified JS");
}

fn minify_js(source: &str) -> String {
    let allocator = Allocator::default();
    let source_type = SourceType::mjs();

    let ret = Parser::new(&allocator, source, source_type).parse();
    assert!(ret.errors.is_empty(), "Parse errors: {:?}", ret.errors);

    let mut program = ret.program;
    let options = MinifierOptions {
        mangle: Some(MangleOptions::default()),
        compress: Some(CompressOptions::smallest()),
    };
    let ret = Minifier::new(options).minify(&allocator, &mut program);

    Codegen::new()
        .with_options(CodegenOptions {
            minify: true,
            comments: CommentOptions::disabled(),
            ..CodegenOptions::default()
        })
        .with_scoping(ret.scoping)
        .build(&program)
        .code
}
