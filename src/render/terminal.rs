//! Terminal presentation of rendered blocks.

use super::markdown::{Block, InlineSpan};

const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RESET: &str = "\x1b[0m";

/// How bold spans are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// ANSI escape codes for bold text.
    #[default]
    Ansi,
    /// No decoration; markers are dropped.
    Plain,
}

/// Format blocks as printable terminal text.
///
/// Level 2 headings are underlined with `=`, level 3 with `-`. List items are
/// indented bullets. Every block is followed by a blank line.
pub fn to_terminal(blocks: &[Block], style: Style) -> String {
    let mut out = String::new();

    for block in blocks {
        match block {
            Block::Heading { level, spans } => {
                let underline = if *level <= 2 { '=' } else { '-' };
                let width = spans.iter().map(|s| s.text().chars().count()).sum::<usize>();
                out.push_str(&format_spans(spans, style));
                out.push('\n');
                out.extend(std::iter::repeat_n(underline, width.max(1)));
                out.push('\n');
            }
            Block::List { items } => {
                for item in items {
                    out.push_str("  • ");
                    out.push_str(&format_spans(item, style));
                    out.push('\n');
                }
            }
            Block::Paragraph { spans } => {
                out.push_str(&format_spans(spans, style));
                out.push('\n');
            }
        }
        out.push('\n');
    }

    out
}

fn format_spans(spans: &[InlineSpan], style: Style) -> String {
    spans
        .iter()
        .map(|span| match (span, style) {
            (InlineSpan::Bold(text), Style::Ansi) => format!("{ANSI_BOLD}{text}{ANSI_RESET}"),
            (span, _) => span.text().to_string(),
        })
        .collect()
}
