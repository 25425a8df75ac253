//! `convert` command: migrate raw `<figure>` HTML back to Markdown.
//!
//! Early posts hand-wrote figure blocks before the pipeline generated
//! them from image syntax. Each block is validated against the exact
//! shape the pipeline now produces and collapsed to `![caption](src)`;
//! anything that deviates is reported and left untouched for a human.

use std::fs;
use std::sync::LazyLock;

use anyhow::{Context, Result, bail, ensure};
use regex::Regex;

use crate::cli::common::collect_documents;
use crate::config::SiteConfig;
use crate::dom::{Node, parse_fragment};
use crate::log;
use crate::media;
use crate::utils::plural_s;

static FIGURE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<figure>.*?</figure>").unwrap());
static CHUNK_SRC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"src="([^"]*)""#).unwrap());

/// Collapse validated figure blocks in markdown sources.
pub fn run_convert(config: &SiteConfig) -> Result<()> {
    let mut converted = 0usize;

    for file in collect_documents(config) {
        if file.extension().is_none_or(|ext| ext != "md") {
            continue;
        }
        let contents = fs::read_to_string(&file)
            .with_context(|| format!("failed to read {}", file.display()))?;

        let updated = FIGURE_BLOCK.replace_all(&contents, |caps: &regex::Captures| {
            let chunk = &caps[0];
            match convert_chunk(chunk, config) {
                Ok(markdown) => {
                    converted += 1;
                    markdown
                }
                Err(e) => {
                    let src = CHUNK_SRC
                        .captures(chunk)
                        .and_then(|c| c.get(1))
                        .map_or("?", |m| m.as_str());
                    eprintln!("{} (image: {}): {:#}", file.display(), src, e);
                    chunk.to_string()
                }
            }
        });

        if updated != contents.as_str() {
            fs::write(&file, updated.as_bytes())
                .with_context(|| format!("failed to write {}", file.display()))?;
        }
    }

    log!("convert"; "{} figure{} converted", converted, plural_s(converted));
    Ok(())
}

/// Validate one figure block and produce its markdown replacement.
///
/// The block must be exactly what the pipeline emits: an `img` with
/// `src`/`width`/`height`/`alt`/`loading` (plus optional `srcset`),
/// dimensions matching the asset on disk, and an optional attribute-free
/// `figcaption`.
fn convert_chunk(chunk: &str, config: &SiteConfig) -> Result<String> {
    let nodes = parse_fragment(chunk);
    let [Node::Element(figure)] = nodes.as_slice() else {
        bail!("expected a single figure element");
    };
    ensure!(
        figure.tag == "figure",
        "expected a figure element, got <{}>",
        figure.tag
    );

    let (img, figcaption) = match figure.children.as_slice() {
        [Node::Element(img)] => (img, None),
        [Node::Element(img), Node::Element(caption)] => (img, Some(caption)),
        _ => bail!("expected an img plus optional figcaption"),
    };
    ensure!(img.tag == "img", "expected an img element, got <{}>", img.tag);

    for (name, _) in img.attrs.iter() {
        ensure!(
            matches!(name, "src" | "width" | "height" | "srcset" | "alt" | "loading"),
            "unexpected attribute `{name}`"
        );
    }

    let src = img.get_attr("src").context("missing src attribute")?;
    ensure!(src.starts_with("/_img/"), "source outside /_img/: {src}");

    let width = img.get_attr("width").context("missing width attribute")?;
    let height = img.get_attr("height").context("missing height attribute")?;
    let asset = config.build.content.join(src.trim_start_matches('/'));
    let (probed_w, probed_h) = media::probe_dimensions(&asset)?;
    ensure!(
        width == probed_w.to_string() && height == probed_h.to_string(),
        "{width}x{height} != {probed_w}x{probed_h}"
    );

    if let Some(srcset) = img.get_attr("srcset") {
        let expected = media::hidpi_variant(src)
            .map(|variant| format!("{variant} 2x"))
            .context("source has no extension for a 2x variant")?;
        ensure!(srcset == expected, "srcset `{srcset}` != `{expected}`");
    }

    ensure!(img.get_attr("alt") == Some(""), "alt must be empty");
    ensure!(
        img.get_attr("loading") == Some("lazy"),
        "loading must be `lazy`"
    );

    let caption = match figcaption {
        Some(caption) => {
            ensure!(
                caption.tag == "figcaption",
                "expected figcaption, got <{}>",
                caption.tag
            );
            ensure!(
                caption.attrs.is_empty(),
                "figcaption must carry no attributes"
            );
            caption_markdown(&caption.children)?.trim().to_string()
        }
        None => String::new(),
    };

    Ok(format!("![{caption}]({src})"))
}

/// Render figcaption children back to inline markdown.
///
/// Only the constructs the pipeline ever emits are handled: text, code
/// spans, and plain links. Whitespace runs in text collapse to single
/// spaces, matching how the browser displays them. Two inline elements
/// with no text between them are rejected: the fragment parser does not
/// retain the spacing that separated them in the source.
fn caption_markdown(nodes: &[Node]) -> Result<String> {
    let mut out = String::new();
    let mut prev_tag: Option<&str> = None;
    for node in nodes {
        match node {
            Node::Text(t) => {
                out.push_str(&collapse_whitespace(&t.content));
                prev_tag = None;
            }
            Node::Element(e) => {
                if let Some(prev) = prev_tag {
                    bail!("no text between <{prev}> and <{}> in figcaption", e.tag);
                }
                match e.tag.as_str() {
                    "code" => {
                        let [Node::Text(inner)] = e.children.as_slice() else {
                            bail!("code span must contain exactly one text node");
                        };
                        out.push('`');
                        out.push_str(&inner.content);
                        out.push('`');
                    }
                    "a" => {
                        let mut attrs = e.attrs.iter();
                        let href = match (attrs.next(), attrs.next()) {
                            (Some(("href", href)), None) => href,
                            _ => bail!("link must carry exactly one href attribute"),
                        };
                        let inner = caption_markdown(&e.children)?;
                        out.push_str(&format!("[{inner}]({href})"));
                    }
                    other => bail!("unhandled <{other}> in figcaption"),
                }
                prev_tag = Some(&e.tag);
            }
        }
    }
    Ok(out)
}

fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn fixture_config(dir: &std::path::Path) -> SiteConfig {
        let mut config = test_parse_config("");
        config.build.content = dir.to_path_buf();
        config
    }

    fn write_svg(dir: &std::path::Path, name: &str, w: u32, h: u32) {
        fs::create_dir_all(dir.join("_img")).unwrap();
        fs::write(
            dir.join("_img").join(name),
            format!(r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}"></svg>"#),
        )
        .unwrap();
    }

    #[test]
    fn test_convert_figure_with_caption() {
        let dir = tempfile::tempdir().unwrap();
        write_svg(dir.path(), "chart.svg", 640, 480);
        let config = fixture_config(dir.path());

        let chunk = concat!(
            "<figure>\n",
            "  <img src=\"/_img/chart.svg\" width=\"640\" height=\"480\" alt=\"\" loading=\"lazy\">\n",
            "  <figcaption>Memory usage over time</figcaption>\n",
            "</figure>"
        );
        assert_eq!(
            convert_chunk(chunk, &config).unwrap(),
            "![Memory usage over time](/_img/chart.svg)"
        );
    }

    #[test]
    fn test_convert_figure_without_caption() {
        let dir = tempfile::tempdir().unwrap();
        write_svg(dir.path(), "plain.svg", 10, 10);
        let config = fixture_config(dir.path());

        let chunk = r#"<figure><img src="/_img/plain.svg" width="10" height="10" alt="" loading="lazy"></figure>"#;
        assert_eq!(convert_chunk(chunk, &config).unwrap(), "![](/_img/plain.svg)");
    }

    #[test]
    fn test_caption_markdown_constructs() {
        let dir = tempfile::tempdir().unwrap();
        write_svg(dir.path(), "dv.svg", 4, 4);
        let config = fixture_config(dir.path());

        let chunk = concat!(
            "<figure>",
            "<img src=\"/_img/dv.svg\" width=\"4\" height=\"4\" alt=\"\" loading=\"lazy\">",
            "<figcaption>See <code>DataView</code> in ",
            "<a href=\"https://tc39.es/ecma262/\">ECMA-262</a></figcaption>",
            "</figure>"
        );
        assert_eq!(
            convert_chunk(chunk, &config).unwrap(),
            "![See `DataView` in [ECMA-262](https://tc39.es/ecma262/)](/_img/dv.svg)"
        );
    }

    #[test]
    fn test_multiline_caption_collapses_to_one_line() {
        let dir = tempfile::tempdir().unwrap();
        write_svg(dir.path(), "wide.svg", 12, 5);
        let config = fixture_config(dir.path());

        let chunk = concat!(
            "<figure>\n",
            "  <img src=\"/_img/wide.svg\" width=\"12\" height=\"5\" alt=\"\" loading=\"lazy\">\n",
            "  <figcaption>\n",
            "    Generational layout of\n",
            "    the V8 heap\n",
            "  </figcaption>\n",
            "</figure>"
        );
        assert_eq!(
            convert_chunk(chunk, &config).unwrap(),
            "![Generational layout of the V8 heap](/_img/wide.svg)"
        );
    }

    #[test]
    fn test_rejects_caption_with_adjacent_inline_elements() {
        let dir = tempfile::tempdir().unwrap();
        write_svg(dir.path(), "pair.svg", 2, 2);
        let config = fixture_config(dir.path());

        // The space between the two elements is not part of the parsed
        // tree, so the caption cannot be reconstructed exactly.
        let chunk = concat!(
            "<figure><img src=\"/_img/pair.svg\" width=\"2\" height=\"2\" alt=\"\" loading=\"lazy\">",
            "<figcaption><code>Map</code> <a href=\"https://v8.dev/\">transitions</a></figcaption></figure>"
        );
        assert!(convert_chunk(chunk, &config).is_err());
    }

    #[test]
    fn test_srcset_must_match_2x_variant() {
        let dir = tempfile::tempdir().unwrap();
        write_svg(dir.path(), "pic.svg", 6, 6);
        let config = fixture_config(dir.path());

        let good = concat!(
            "<figure><img src=\"/_img/pic.svg\" width=\"6\" height=\"6\" ",
            "srcset=\"/_img/pic@2x.svg 2x\" alt=\"\" loading=\"lazy\"></figure>"
        );
        assert!(convert_chunk(good, &config).is_ok());

        let bad = concat!(
            "<figure><img src=\"/_img/pic.svg\" width=\"6\" height=\"6\" ",
            "srcset=\"/_img/other@2x.svg 2x\" alt=\"\" loading=\"lazy\"></figure>"
        );
        assert!(convert_chunk(bad, &config).is_err());
    }

    #[test]
    fn test_rejects_malformed_figures() {
        let dir = tempfile::tempdir().unwrap();
        write_svg(dir.path(), "a.svg", 5, 5);
        let config = fixture_config(dir.path());

        // Dimension mismatch
        let wrong_dims =
            r#"<figure><img src="/_img/a.svg" width="9" height="9" alt="" loading="lazy"></figure>"#;
        assert!(convert_chunk(wrong_dims, &config).is_err());

        // External source
        let external = r#"<figure><img src="https://example.com/a.png" width="5" height="5" alt="" loading="lazy"></figure>"#;
        assert!(convert_chunk(external, &config).is_err());

        // Caption text belongs in the figcaption, not alt
        let alt_set =
            r#"<figure><img src="/_img/a.svg" width="5" height="5" alt="x" loading="lazy"></figure>"#;
        assert!(convert_chunk(alt_set, &config).is_err());

        // Stray attribute
        let extra = r#"<figure><img src="/_img/a.svg" width="5" height="5" alt="" loading="lazy" class="x"></figure>"#;
        assert!(convert_chunk(extra, &config).is_err());
    }

    #[test]
    fn test_run_convert_keeps_malformed_chunks() {
        let dir = tempfile::tempdir().unwrap();
        write_svg(dir.path(), "ok.svg", 3, 3);
        let config = fixture_config(dir.path());

        let body = concat!(
            "intro\n\n",
            "<figure><img src=\"/_img/ok.svg\" width=\"3\" height=\"3\" alt=\"\" loading=\"lazy\"></figure>\n\n",
            "<figure><img src=\"/_img/ok.svg\" width=\"3\" height=\"3\" alt=\"oops\" loading=\"lazy\"></figure>\n"
        );
        fs::write(dir.path().join("post.md"), body).unwrap();
        // Figures in html sources are out of scope for the migration.
        let html = "<figure><img src=\"/_img/ok.svg\"></figure>\n";
        fs::write(dir.path().join("about.html"), html).unwrap();

        run_convert(&config).unwrap();

        let updated = fs::read_to_string(dir.path().join("post.md")).unwrap();
        assert!(updated.contains("![](/_img/ok.svg)"));
        assert!(updated.contains("alt=\"oops\""));
        assert_eq!(fs::read_to_string(dir.path().join("about.html")).unwrap(), html);
    }
}
