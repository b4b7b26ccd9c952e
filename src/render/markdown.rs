//! Lightweight markdown renderer for model replies.
//!
//! Parses a small markdown subset into block nodes:
//!
//! - `## text` and `### text` - level 2 and level 3 headings
//! - `- item`, `* item`, `• item` - list items, batched into one list block
//! - any other non-blank line - a paragraph
//! - `**text**` inside any block - a bold span
//!
//! Parsing is one forward pass over the `\n`-separated lines. Lines are
//! classified by their trimmed form. A pending list is only flushed by a heading,
//! a paragraph or the end of input; blank lines do not end a list, so bullets
//! separated by blank lines still coalesce into a single list block.
//!
//! Rendering never fails. Malformed markdown comes out as plain paragraphs.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static BOLD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("Invalid bold span regex"));

const BULLET_PREFIXES: [&str; 3] = ["- ", "* ", "• "];

/// A run of text inside a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum InlineSpan {
    Plain(String),
    Bold(String),
}

impl InlineSpan {
    /// The span's text without markers.
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::Plain(text) | InlineSpan::Bold(text) => text,
        }
    }
}

/// A structured unit of rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A `##` (level 2) or `###` (level 3) heading.
    Heading { level: u8, spans: Vec<InlineSpan> },
    /// Consecutive list items, in encounter order.
    List { items: Vec<Vec<InlineSpan>> },
    /// A paragraph built from one source line.
    Paragraph { spans: Vec<InlineSpan> },
}

/// Render raw text into block nodes.
///
/// ```text
/// render("## Title\nBody text")
///   => [Heading { level: 2, "Title" }, Paragraph { "Body text" }]
/// render("- a\n- b\n\nPlain")
///   => [List { ["a", "b"] }, Paragraph { "Plain" }]
/// ```
pub fn render(text: &str) -> Vec<Block> {
    text.split('\n')
        .fold(RenderState::default(), RenderState::push_line)
        .finish()
}

/// Split a line into plain and bold spans.
///
/// Only complete `**...**` pairs become bold; the shortest pair wins. Plain runs
/// before, between and after bold runs are always emitted, even when empty, and
/// keep their whitespace verbatim.
pub fn process_inline(line: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut last = 0;

    for captures in BOLD_REGEX.captures_iter(line) {
        let (Some(whole), Some(inner)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        spans.push(InlineSpan::Plain(line[last..whole.start()].to_string()));
        spans.push(InlineSpan::Bold(inner.as_str().to_string()));
        last = whole.end();
    }

    spans.push(InlineSpan::Plain(line[last..].to_string()));
    spans
}

/// How a single line contributes to the output.
#[derive(Debug, PartialEq, Eq)]
enum LineKind<'a> {
    Heading(u8, &'a str),
    ListItem(&'a str),
    Paragraph(&'a str),
    Blank,
}

fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();

    if let Some(text) = trimmed.strip_prefix("### ") {
        return LineKind::Heading(3, text);
    }
    if let Some(text) = trimmed.strip_prefix("## ") {
        return LineKind::Heading(2, text);
    }
    if let Some(item) = BULLET_PREFIXES
        .iter()
        .find_map(|prefix| trimmed.strip_prefix(prefix))
    {
        return LineKind::ListItem(item.trim_start());
    }
    if !trimmed.is_empty() {
        return LineKind::Paragraph(line);
    }
    LineKind::Blank
}

/// Accumulator threaded through the fold: finished blocks plus the list being built.
#[derive(Debug, Default)]
struct RenderState {
    blocks: Vec<Block>,
    pending_items: Vec<Vec<InlineSpan>>,
}

impl RenderState {
    fn push_line(mut self, line: &str) -> Self {
        match classify(line) {
            LineKind::Heading(level, text) => {
                self.flush_list();
                self.blocks.push(Block::Heading {
                    level,
                    spans: process_inline(text),
                });
            }
            LineKind::ListItem(item) => self.pending_items.push(process_inline(item)),
            LineKind::Paragraph(text) => {
                self.flush_list();
                self.blocks.push(Block::Paragraph {
                    spans: process_inline(text),
                });
            }
            LineKind::Blank => {}
        }
        self
    }

    fn flush_list(&mut self) {
        if !self.pending_items.is_empty() {
            let items = std::mem::take(&mut self.pending_items);
            self.blocks.push(Block::List { items });
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush_list();
        self.blocks
    }
}
