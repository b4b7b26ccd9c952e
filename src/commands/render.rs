//! Implementation of the `promptline render` command.

use super::output_style;
use crate::cli::RenderArgs;
use crate::error::{PromptlineError, Result};
use crate::render::{Style, render, to_terminal};
use std::io::Read;

/// Execute the `promptline render` command.
pub fn cmd_render(args: RenderArgs) -> Result<()> {
    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            PromptlineError::UserError(format!("failed to read '{}': {}", path.display(), e))
        })?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| PromptlineError::UserError(format!("failed to read stdin: {}", e)))?;
            text
        }
    };

    let output = if args.json {
        render_json(&text)?
    } else {
        render_text(&text, output_style(args.plain))
    };
    print!("{}", output);
    Ok(())
}

pub(crate) fn render_text(text: &str, style: Style) -> String {
    to_terminal(&render(text), style)
}

pub(crate) fn render_json(text: &str) -> Result<String> {
    let mut json = serde_json::to_string_pretty(&render(text)).map_err(|e| {
        PromptlineError::UserError(format!("failed to serialize rendered blocks: {}", e))
    })?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_render_text_plain() {
        let out = render_text("### Risks\n- Latency\n- **Cost**\nShip it", Style::Plain);
        assert_eq!(out, "Risks\n-----\n\n  • Latency\n  • Cost\n\nShip it\n\n");
    }

    #[test]
    fn test_render_text_ansi_bold() {
        let out = render_text("Bold **word** here", Style::Ansi);
        assert_eq!(out, "Bold \x1b[1mword\x1b[0m here\n\n");
    }

    #[test]
    fn test_render_json_structure() {
        let out = render_json("## Title\nBody text").unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[0]["type"], "heading");
        assert_eq!(value[0]["level"], 2);
        assert_eq!(value[1]["type"], "paragraph");
        assert!(
            value[1]["spans"]
                .as_array()
                .unwrap()
                .contains(&json!({"type": "plain", "text": "Body text"}))
        );
    }

    #[test]
    fn test_render_json_empty_input() {
        assert_eq!(render_json("").unwrap(), "[]\n");
    }
}
