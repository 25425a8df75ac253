//! Markdown to document-tree conversion via pulldown-cmark.

use std::path::Path;

use anyhow::Result;
use pulldown_cmark::{
    Alignment, CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd,
};

use super::container::{self, Block, ContainerKind};
use crate::dom::{Attrs, Document, Element, Node, Text, parse_fragment};

/// Markdown parsing options.
#[derive(Debug, Clone)]
pub struct MarkdownOptions {
    /// Enable tables extension.
    pub tables: bool,
    /// Enable footnotes extension.
    pub footnotes: bool,
    /// Enable strikethrough extension.
    pub strikethrough: bool,
    /// Render single newlines as `<br>`.
    pub breaks: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            tables: true,
            footnotes: true,
            strikethrough: true,
            breaks: true,
        }
    }
}

impl MarkdownOptions {
    fn to_pulldown_options(&self) -> Options {
        let mut options = Options::empty();
        if self.tables {
            options.insert(Options::ENABLE_TABLES);
        }
        if self.footnotes {
            options.insert(Options::ENABLE_FOOTNOTES);
        }
        if self.strikethrough {
            options.insert(Options::ENABLE_STRIKETHROUGH);
        }
        options
    }
}

/// Convert a markdown body (with `:::` containers) into a document tree
/// rooted at `<article>`.
pub fn from_markdown(markdown: &str, options: &MarkdownOptions, source: &Path) -> Result<Document> {
    let blocks = container::parse_blocks(markdown, source)?;
    let mut root = Element::new("article");
    render_blocks(&blocks, options, &mut root);
    Ok(Document::new(root))
}

/// Render parsed blocks into the parent element.
fn render_blocks(blocks: &[Block], options: &MarkdownOptions, parent: &mut Element) {
    for block in blocks {
        match block {
            Block::Markdown(text) => {
                let converter = MarkdownConverter::new(options.breaks);
                let nodes = converter.convert(text, options.to_pulldown_options());
                parent.children.extend(nodes);
            }
            Block::Container { kind, caption, body } => {
                let mut element = container_element(*kind);
                render_blocks(body, options, &mut element);
                if let Some(caption) = caption {
                    let mut figcaption = Element::new("figcaption");
                    figcaption.push_text(caption);
                    element.push_elem(figcaption);
                }
                parent.push_elem(element);
            }
        }
    }
}

/// Wrapper element for a container kind.
fn container_element(kind: ContainerKind) -> Element {
    match kind {
        ContainerKind::Figure => Element::new("figure"),
        other => Element::with_attrs("div", Attrs::from([("class", other.class_name())])),
    }
}

/// Event-stream converter building the element tree.
struct MarkdownConverter {
    breaks: bool,
    /// Open elements, innermost last.
    stack: Vec<Element>,
    /// Completed top-level nodes.
    root_children: Vec<Node>,
    /// Raw HTML accumulated for the current HTML block. Block HTML
    /// arrives line by line, so parsing per event would orphan closers.
    html_block: Option<String>,
    /// Column alignments of the current table.
    table_aligns: Vec<Alignment>,
    in_table_head: bool,
    cell_index: usize,
}

impl MarkdownConverter {
    fn new(breaks: bool) -> Self {
        Self {
            breaks,
            stack: Vec::new(),
            root_children: Vec::new(),
            html_block: None,
            table_aligns: Vec::new(),
            in_table_head: false,
            cell_index: 0,
        }
    }

    fn convert(mut self, markdown: &str, options: Options) -> Vec<Node> {
        for event in Parser::new_ext(markdown, options) {
            self.handle_event(event);
        }
        while let Some(element) = self.stack.pop() {
            self.add_node(Node::Element(Box::new(element)));
        }
        self.root_children
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.add_text(text.as_ref()),
            Event::Code(code) => self.add_inline_code(code.as_ref()),
            Event::Html(html) => self.add_block_html(html.as_ref()),
            Event::InlineHtml(html) => self.add_inline_html(html.as_ref()),
            Event::SoftBreak => self.add_soft_break(),
            Event::HardBreak => self.add_empty_element("br"),
            Event::Rule => self.add_empty_element("hr"),
            Event::FootnoteReference(name) => self.add_footnote_ref(name.as_ref()),
            // Extensions that are never enabled for site content
            Event::TaskListMarker(_) | Event::InlineMath(_) | Event::DisplayMath(_) => {}
        }
    }

    fn start_tag(&mut self, tag: Tag) {
        let element = match tag {
            Tag::Paragraph => Element::new("p"),
            Tag::Heading { level, .. } => Element::new(heading_tag(level)),
            Tag::BlockQuote(_) => Element::new("blockquote"),
            Tag::CodeBlock(kind) => {
                let mut code = Element::new("code");
                if let CodeBlockKind::Fenced(info) = &kind
                    && let Some(lang) = info.split_whitespace().next()
                {
                    code.set_attr("class", &format!("language-{lang}"));
                }
                code
            }
            Tag::HtmlBlock => {
                self.html_block = Some(String::new());
                return;
            }
            Tag::List(Some(start)) => {
                let mut list = Element::new("ol");
                if start != 1 {
                    list.set_attr("start", &start.to_string());
                }
                list
            }
            Tag::List(None) => Element::new("ul"),
            Tag::Item => Element::new("li"),
            Tag::FootnoteDefinition(name) => {
                let id = format!("fn-{name}");
                Element::with_attrs("div", Attrs::from([("class", "footnote"), ("id", id.as_str())]))
            }
            Tag::Table(aligns) => {
                self.table_aligns = aligns;
                Element::new("table")
            }
            Tag::TableHead => {
                self.in_table_head = true;
                self.cell_index = 0;
                Element::new("tr")
            }
            Tag::TableRow => {
                self.cell_index = 0;
                Element::new("tr")
            }
            Tag::TableCell => {
                let mut cell = Element::new(if self.in_table_head { "th" } else { "td" });
                if let Some(style) = alignment_style(self.table_aligns.get(self.cell_index)) {
                    cell.set_attr("style", style);
                }
                self.cell_index += 1;
                cell
            }
            Tag::Emphasis => Element::new("em"),
            Tag::Strong => Element::new("strong"),
            Tag::Strikethrough => Element::new("del"),
            Tag::Superscript => Element::new("sup"),
            Tag::Subscript => Element::new("sub"),
            Tag::Link { dest_url, title, .. } => {
                let mut link = Element::new("a");
                link.set_attr("href", &dest_url);
                if !title.is_empty() {
                    link.set_attr("title", &title);
                }
                link
            }
            Tag::Image { dest_url, title, .. } => {
                let mut image = Element::new("img");
                image.set_attr("src", &dest_url);
                if !title.is_empty() {
                    image.set_attr("title", &title);
                }
                image
            }
            Tag::DefinitionList => Element::new("dl"),
            Tag::DefinitionListTitle => Element::new("dt"),
            Tag::DefinitionListDefinition => Element::new("dd"),
            Tag::MetadataBlock(_) => Element::new("div"),
        };
        self.stack.push(element);
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::HtmlBlock => {
                if let Some(html) = self.html_block.take() {
                    for node in parse_fragment(&html) {
                        self.add_node(node);
                    }
                }
            }
            // The header row closes: wrap it in <thead>, open <tbody>
            TagEnd::TableHead => {
                self.in_table_head = false;
                if let Some(row) = self.stack.pop() {
                    let mut thead = Element::new("thead");
                    thead.push_elem(row);
                    self.add_node(Node::Element(Box::new(thead)));
                }
                self.stack.push(Element::new("tbody"));
            }
            TagEnd::Table => {
                if let Some(tbody) = self.stack.pop()
                    && !tbody.children.is_empty()
                {
                    self.add_node(Node::Element(Box::new(tbody)));
                }
                self.pop_frame();
            }
            TagEnd::CodeBlock => {
                if let Some(code) = self.stack.pop() {
                    let mut pre = Element::new("pre");
                    pre.push_elem(code);
                    self.add_node(Node::Element(Box::new(pre)));
                }
            }
            // Children collected the alt text; move it into the attribute
            TagEnd::Image => {
                if let Some(mut image) = self.stack.pop() {
                    let alt = image.text_content();
                    image.children.clear();
                    image.set_attr("alt", &alt);
                    self.add_node(Node::Element(Box::new(image)));
                }
            }
            TagEnd::MetadataBlock(_) => {
                self.stack.pop();
            }
            _ => self.pop_frame(),
        }
    }

    /// Pop the innermost element and attach it to its parent.
    fn pop_frame(&mut self) {
        if let Some(element) = self.stack.pop() {
            self.add_node(Node::Element(Box::new(element)));
        }
    }

    fn add_node(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(parent) => parent.push(node),
            None => self.root_children.push(node),
        }
    }

    fn add_text(&mut self, text: &str) {
        self.add_node(Node::Text(Text::new(text)));
    }

    fn add_empty_element(&mut self, tag: &str) {
        self.add_node(Node::Element(Box::new(Element::new(tag))));
    }

    fn add_soft_break(&mut self) {
        if self.breaks {
            self.add_empty_element("br");
        } else {
            self.add_text("\n");
        }
    }

    fn add_inline_code(&mut self, code: &str) {
        let mut element = Element::new("code");
        element.push_text(code);
        self.add_node(Node::Element(Box::new(element)));
    }

    fn add_block_html(&mut self, html: &str) {
        match &mut self.html_block {
            Some(buffer) => buffer.push_str(html),
            None => {
                for node in parse_fragment(html) {
                    self.add_node(node);
                }
            }
        }
    }

    /// Inline HTML passes through verbatim. Paired tags arrive as
    /// separate events (`<kbd>` ... `</kbd>`), so they cannot be
    /// tree-parsed individually.
    fn add_inline_html(&mut self, html: &str) {
        self.add_node(Node::Text(Text::raw(html)));
    }

    fn add_footnote_ref(&mut self, name: &str) {
        let href = format!("#fn-{name}");
        let id = format!("fnref-{name}");
        let mut link = Element::with_attrs(
            "a",
            Attrs::from([("href", href.as_str()), ("id", id.as_str())]),
        );
        link.push_text(&format!("[{name}]"));

        let mut sup = Element::with_attrs("sup", Attrs::from([("class", "footnote-ref")]));
        sup.push_elem(link);
        self.add_node(Node::Element(Box::new(sup)));
    }
}

fn heading_tag(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "h1",
        HeadingLevel::H2 => "h2",
        HeadingLevel::H3 => "h3",
        HeadingLevel::H4 => "h4",
        HeadingLevel::H5 => "h5",
        HeadingLevel::H6 => "h6",
    }
}

/// Column alignment to the inline style markdown renderers emit.
fn alignment_style(align: Option<&Alignment>) -> Option<&'static str> {
    match align? {
        Alignment::Left => Some("text-align:left"),
        Alignment::Center => Some("text-align:center"),
        Alignment::Right => Some("text-align:right"),
        Alignment::None => None,
    }
}
