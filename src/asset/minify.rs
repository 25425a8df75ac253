//! JS and CSS minification for passthrough assets.
//!
//! Uses oxc for JavaScript and lightningcss for CSS. The build script
//! runs the same oxc pass over the embedded browser scripts.

use std::path::Path;

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::mangler::MangleOptions;
use oxc::minifier::{CompressOptions, Minifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;

/// Minify JavaScript source code.
pub fn minify_js(source: &str) -> Option<String> {
    let allocator = Allocator::default();
    let source_type = SourceType::mjs();
    let ret = Parser::new(&allocator, source, source_type).parse();
    if !ret.errors.is_empty() {
        return None;
    }
    let mut program = ret.program;
    let options = MinifierOptions {
        mangle: Some(MangleOptions::default()),
        compress: Some(CompressOptions::smallest()),
    };
    let ret = Minifier::new(options).minify(&allocator, &mut program);
    let code = Codegen::new()
        .with_options(CodegenOptions {
            minify: true,
            comments: CommentOptions::disabled(),
            ..CodegenOptions::default()
        })
        .with_scoping(ret.scoping)
        .build(&program)
        .code;
    Some(code)
}

/// Minify CSS source code.
pub fn minify_css(source: &str) -> Option<String> {
    let stylesheet = StyleSheet::parse(source, ParserOptions::default()).ok()?;
    let result = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .ok()?;
    Some(result.code)
}

/// Minify content based on file extension.
///
/// Returns `Some(minified)` if minification succeeded, `None` otherwise.
pub fn minify_by_ext(path: &Path, content: &str) -> Option<String> {
    let ext = path.extension()?.to_str()?;
    match ext {
        "js" => minify_js(content),
        "css" => minify_css(content),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_css_strips_whitespace() {
        let minified = minify_css("body {\n  margin: 0;\n}\n").unwrap();
        assert_eq!(minified, "body{margin:0}");
    }

    #[test]
    fn test_minify_js_rejects_broken_source() {
        assert!(minify_js("function (").is_none());
    }

    #[test]
    fn test_minify_js_shrinks() {
        let source = "export function double(value) {\n  return value * 2;\n}\n";
        let minified = minify_js(source).unwrap();
        assert!(minified.len() < source.len());
        assert!(minified.contains("double"));
    }

    #[test]
    fn test_minify_by_ext_ignores_binaries() {
        assert!(minify_by_ext(Path::new("logo.png"), "not text").is_none());
    }
}
