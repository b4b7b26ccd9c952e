//! Command implementations for promptline.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the shared bridge from the synchronous CLI to the
//! async model client.

mod context;
mod init;
mod okrs;
mod prompt;
mod render;
mod timeline;
mod trending;

use crate::cli::Command;
use crate::config::Config;
use crate::error::Result;
use crate::llm::{GeminiClient, LlmError};
use crate::motivators::motivator_of_the_day;
use crate::render::Style;
use std::future::Future;
use std::io::IsTerminal;
use tracing::debug;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Init(args) => init::cmd_init(args),
        Command::Timeline(cmd) => timeline::dispatch_timeline(cmd),
        Command::Prompt(args) => prompt::cmd_prompt(args),
        Command::Run(args) => prompt::cmd_run(args),
        Command::Okrs(args) => okrs::cmd_okrs(args),
        Command::Trending(args) => trending::cmd_trending(args),
        Command::Context(cmd) => context::dispatch_context(cmd),
        Command::Render(args) => render::cmd_render(args),
        Command::Motivate => {
            println!("{}", motivator_of_the_day());
            Ok(())
        }
    }
}

/// Build the Gemini client from config. Fails before any request when the
/// API key is missing.
pub(crate) fn connect_model(config: &Config) -> Result<GeminiClient> {
    let client_config = config.client_config()?;
    debug!(model = %client_config.model, base_url = %client_config.base_url, "connecting model client");
    Ok(GeminiClient::new(client_config)?)
}

/// Run a future to completion on a fresh tokio runtime.
pub(crate) fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| LlmError::Transport(format!("failed to start async runtime: {}", e)))?;
    Ok(runtime.block_on(future))
}

/// ANSI styling only when asked for and stdout is a terminal.
pub(crate) fn output_style(plain: bool) -> Style {
    if plain || !std::io::stdout().is_terminal() {
        Style::Plain
    } else {
        Style::Ansi
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PromptlineError;
    use serial_test::serial;

    #[test]
    fn block_on_runs_future() {
        let value = block_on(async { 40 + 2 }).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn plain_flag_forces_plain_style() {
        assert_eq!(output_style(true), Style::Plain);
    }

    #[test]
    #[serial]
    fn connect_without_key_is_llm_error() {
        let config = Config {
            api_key_env: "PROMPTLINE_TEST_CONNECT_KEY".to_string(),
            ..Config::default()
        };
        // SAFETY: serialized test; no other thread reads this variable.
        unsafe { std::env::remove_var("PROMPTLINE_TEST_CONNECT_KEY") };

        let err = connect_model(&config).err().unwrap();
        assert!(matches!(err, PromptlineError::Llm(LlmError::MissingApiKey { .. })));
        assert_eq!(err.exit_code(), crate::exit_codes::LLM_FAILURE);
    }
}
