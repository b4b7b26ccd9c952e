//! Rendering of model replies.
//!
//! - **Markdown**: raw text to structured block nodes
//! - **Terminal**: block nodes to printable text

mod markdown;
mod terminal;

pub use markdown::{Block, InlineSpan, process_inline, render};
pub use terminal::{Style, to_terminal};
