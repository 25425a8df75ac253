//! `:::` container blocks in markdown sources.
//!
//! Containers wrap markdown in a classed `<div>` (or a `<figure>` with
//! caption) and may nest when the outer fence uses more colons:
//!
//! ```text
//! :::: note
//! ::: figure A caption
//! ![](/_img/chart.svg)
//! :::
//! ::::
//! ```

use std::path::Path;

use anyhow::{Result, bail};

/// Container flavors the content tree uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Note,
    TableWrapper,
    EcmascriptAlgorithm,
    Figure,
}

impl ContainerKind {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "note" => Some(Self::Note),
            "table-wrapper" => Some(Self::TableWrapper),
            "ecmascript-algorithm" => Some(Self::EcmascriptAlgorithm),
            "figure" => Some(Self::Figure),
            _ => None,
        }
    }

    /// Name as written in the fence, doubling as the wrapper class.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::TableWrapper => "table-wrapper",
            Self::EcmascriptAlgorithm => "ecmascript-algorithm",
            Self::Figure => "figure",
        }
    }
}

/// A block-level segment of a markdown document.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Plain markdown between container fences.
    Markdown(String),
    /// A `::: kind` container with its recursively parsed body.
    Container {
        kind: ContainerKind,
        /// Figure caption (present exactly for figures).
        caption: Option<String>,
        body: Vec<Block>,
    },
}

/// Split a markdown body into plain segments and container blocks.
///
/// Unknown container names, missing figure captions, and unbalanced
/// fences are build errors naming the source file.
pub fn parse_blocks(input: &str, source: &Path) -> Result<Vec<Block>> {
    ContainerParser {
        source,
        stack: Vec::new(),
        root: Vec::new(),
        root_text: String::new(),
        open_code: None,
    }
    .parse(input)
}

struct OpenContainer {
    kind: ContainerKind,
    caption: Option<String>,
    fence_len: usize,
    body: Vec<Block>,
    text: String,
}

struct ContainerParser<'a> {
    source: &'a Path,
    stack: Vec<OpenContainer>,
    root: Vec<Block>,
    root_text: String,
    /// Open code fence (marker char, length), so `:::` inside fenced
    /// code stays literal.
    open_code: Option<(u8, usize)>,
}

impl ContainerParser<'_> {
    fn parse(mut self, input: &str) -> Result<Vec<Block>> {
        for line in input.lines() {
            if let Some((marker, len, info)) = code_fence(line) {
                match self.open_code {
                    None => self.open_code = Some((marker, len)),
                    Some((open_marker, open_len))
                        if marker == open_marker && len >= open_len && info.is_empty() =>
                    {
                        self.open_code = None;
                    }
                    Some(_) => {}
                }
                self.text_line(line);
                continue;
            }
            if self.open_code.is_some() {
                self.text_line(line);
                continue;
            }

            match container_fence(line) {
                Some((len, "")) => self.close(len, line)?,
                Some((len, info)) => self.open(len, info)?,
                None => self.text_line(line),
            }
        }

        if let Some(open) = self.stack.last() {
            bail!(
                "unterminated ':::{}' container in {}",
                open.kind.class_name(),
                self.source.display()
            );
        }
        flush_text(&mut self.root_text, &mut self.root);
        Ok(self.root)
    }

    fn open(&mut self, fence_len: usize, info: &str) -> Result<()> {
        let (name, rest) = match info.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (info, ""),
        };
        let Some(kind) = ContainerKind::from_name(name) else {
            bail!("unknown container ':::{name}' in {}", self.source.display());
        };

        let caption = if kind == ContainerKind::Figure {
            if rest.is_empty() {
                bail!("figure container without a caption in {}", self.source.display());
            }
            Some(rest.to_string())
        } else {
            None
        };

        self.flush_level();
        self.stack.push(OpenContainer {
            kind,
            caption,
            fence_len,
            body: Vec::new(),
            text: String::new(),
        });
        Ok(())
    }

    fn close(&mut self, fence_len: usize, line: &str) -> Result<()> {
        match self.stack.pop() {
            Some(mut top) if fence_len >= top.fence_len => {
                flush_text(&mut top.text, &mut top.body);
                let block = Block::Container {
                    kind: top.kind,
                    caption: top.caption,
                    body: top.body,
                };
                match self.stack.last_mut() {
                    Some(parent) => parent.body.push(block),
                    None => self.root.push(block),
                }
            }
            // A closer shorter than the opening fence stays literal
            Some(top) => {
                self.stack.push(top);
                self.text_line(line);
            }
            None => bail!(
                "':::' closing fence without an open container in {}",
                self.source.display()
            ),
        }
        Ok(())
    }

    fn text_line(&mut self, line: &str) {
        let buffer = match self.stack.last_mut() {
            Some(top) => &mut top.text,
            None => &mut self.root_text,
        };
        buffer.push_str(line);
        buffer.push('\n');
    }

    /// Flush accumulated text of the innermost level into its block list.
    fn flush_level(&mut self) {
        match self.stack.last_mut() {
            Some(top) => flush_text(&mut top.text, &mut top.body),
            None => flush_text(&mut self.root_text, &mut self.root),
        }
    }
}

fn flush_text(text: &mut String, blocks: &mut Vec<Block>) {
    if text.trim().is_empty() {
        text.clear();
    } else {
        blocks.push(Block::Markdown(std::mem::take(text)));
    }
}

/// Container fence: three or more leading colons. Returns `(len, info)`.
fn container_fence(line: &str) -> Option<(usize, &str)> {
    let trimmed = line.trim_end();
    let len = trimmed.bytes().take_while(|&b| b == b':').count();
    (len >= 3).then(|| (len, trimmed[len..].trim()))
}

/// Code fence: three or more backticks or tildes at the line start.
/// Returns `(marker, len, info)`.
fn code_fence(line: &str) -> Option<(u8, usize, &str)> {
    let trimmed = line.trim_start();
    let first = *trimmed.as_bytes().first()?;
    if first != b'`' && first != b'~' {
        return None;
    }
    let len = trimmed.bytes().take_while(|&b| b == first).count();
    (len >= 3).then(|| (first, len, trimmed[len..].trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Vec<Block>> {
        parse_blocks(input, Path::new("src/blog/test.md"))
    }

    #[test]
    fn test_no_containers() {
        let blocks = parse("# Title\n\nSome text.\n").unwrap();
        assert_eq!(blocks, vec![Block::Markdown("# Title\n\nSome text.\n".into())]);
    }

    #[test]
    fn test_note_container() {
        let blocks = parse("before\n\n::: note\n**Note:** stuff.\n:::\n\nafter\n").unwrap();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0], Block::Markdown("before\n\n".into()));
        assert_eq!(
            blocks[1],
            Block::Container {
                kind: ContainerKind::Note,
                caption: None,
                body: vec![Block::Markdown("**Note:** stuff.\n".into())],
            }
        );
        assert_eq!(blocks[2], Block::Markdown("\nafter\n".into()));
    }

    #[test]
    fn test_figure_caption() {
        let blocks = parse("::: figure Allocation over time\n![](/_img/a.svg)\n:::\n").unwrap();
        assert_eq!(
            blocks,
            vec![Block::Container {
                kind: ContainerKind::Figure,
                caption: Some("Allocation over time".into()),
                body: vec![Block::Markdown("![](/_img/a.svg)\n".into())],
            }]
        );
    }

    #[test]
    fn test_nested_containers() {
        let input = ":::: note\nbefore\n::: figure A caption\n![](/x.png)\n:::\nafter\n::::\n";
        let blocks = parse(input).unwrap();
        let Block::Container { kind, body, .. } = &blocks[0] else {
            panic!("expected container");
        };
        assert_eq!(*kind, ContainerKind::Note);
        assert_eq!(body.len(), 3);
        assert_eq!(body[0], Block::Markdown("before\n".into()));
        assert!(matches!(
            &body[1],
            Block::Container { kind: ContainerKind::Figure, .. }
        ));
        assert_eq!(body[2], Block::Markdown("after\n".into()));
    }

    #[test]
    fn test_unknown_container_is_error() {
        let err = parse("::: warning\nx\n:::\n").unwrap_err();
        assert!(err.to_string().contains("unknown container ':::warning'"));
        assert!(err.to_string().contains("test.md"));
    }

    #[test]
    fn test_unterminated_is_error() {
        let err = parse("::: note\nnever closed\n").unwrap_err();
        assert!(err.to_string().contains("unterminated ':::note'"));
    }

    #[test]
    fn test_figure_without_caption_is_error() {
        let err = parse("::: figure\n![](/x.png)\n:::\n").unwrap_err();
        assert!(err.to_string().contains("figure container without a caption"));
    }

    #[test]
    fn test_close_without_open_is_error() {
        let err = parse("some text\n:::\n").unwrap_err();
        assert!(err.to_string().contains("without an open container"));
    }

    #[test]
    fn test_fences_inside_code_blocks_stay_literal() {
        let input = "```\n::: whatever\n```\ntext\n";
        let blocks = parse(input).unwrap();
        assert_eq!(blocks, vec![Block::Markdown(input.into())]);
    }

    #[test]
    fn test_short_closer_stays_literal() {
        let blocks = parse(":::: note\n:::\n::::\n").unwrap();
        assert_eq!(
            blocks,
            vec![Block::Container {
                kind: ContainerKind::Note,
                caption: None,
                body: vec![Block::Markdown(":::\n".into())],
            }]
        );
    }

    #[test]
    fn test_tilde_code_fence() {
        let input = "~~~js\n::: note\n~~~\n";
        let blocks = parse(input).unwrap();
        assert_eq!(blocks, vec![Block::Markdown(input.into())]);
    }
}
