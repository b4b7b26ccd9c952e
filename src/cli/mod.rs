//! CLI argument parsing for promptline.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Promptline: product lifecycle planner that compiles mega prompts for LLMs.
///
/// Pick an activity from the lifecycle timeline, compile its prompt with your
/// product context, and optionally send it to a generative model:
/// - `timeline` lists stages and activities
/// - `prompt` prints a compiled prompt you can paste anywhere
/// - `run` sends it to the model and renders the reply
#[derive(Parser, Debug)]
#[command(name = "promptline")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides this.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for promptline.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a promptline workspace in the current directory.
    ///
    /// Writes `.promptline/config.yaml` and `.promptline/product.yaml` with defaults.
    Init(InitArgs),

    /// Show the lifecycle timeline, or generate and reset a custom one.
    Timeline(TimelineCommand),

    /// Print the compiled prompt for an activity.
    Prompt(PromptArgs),

    /// Compile an activity's prompt, send it to the model and render the reply.
    Run(RunArgs),

    /// Generate OKRs for an activity.
    Okrs(OkrsArgs),

    /// List trending AI product ideas and optionally adopt one.
    Trending(TrendingArgs),

    /// Show or change the product context.
    Context(ContextCommand),

    /// Render markdown from a file or stdin.
    Render(RenderArgs),

    /// Print the product-management motivator of the day.
    Motivate,
}

/// Arguments for the `init` command.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite existing config and product files and drop a custom timeline.
    #[arg(long)]
    pub force: bool,
}

/// Timeline listing and management.
#[derive(Args, Debug)]
pub struct TimelineCommand {
    #[command(subcommand)]
    pub action: Option<TimelineAction>,

    /// Only show activities whose title or description contains TERM.
    #[arg(short, long, value_name = "TERM")]
    pub search: Option<String>,
}

/// Timeline subcommands.
#[derive(Subcommand, Debug)]
pub enum TimelineAction {
    /// Ask the model for a timeline tailored to the product context and save it.
    Generate,

    /// Delete the custom timeline and go back to the built-in one.
    Reset,
}

/// Arguments for the `prompt` command.
#[derive(Args, Debug)]
pub struct PromptArgs {
    /// Activity id (see `promptline timeline`).
    pub activity: String,

    /// Use the activity's OKR prompt instead of its mega prompt.
    #[arg(long)]
    pub okr: bool,

    /// Show which placeholders the template uses and what they resolve to.
    #[arg(long)]
    pub explain: bool,
}

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Activity id (see `promptline timeline`).
    pub activity: String,

    /// Send the activity's OKR prompt instead of its mega prompt.
    #[arg(long)]
    pub okr: bool,

    /// Render without ANSI styling.
    #[arg(long)]
    pub plain: bool,

    /// Print the model's reply as-is, without rendering.
    #[arg(long, conflicts_with = "plain")]
    pub raw: bool,
}

/// Arguments for the `okrs` command.
#[derive(Args, Debug)]
pub struct OkrsArgs {
    /// Activity id (see `promptline timeline`).
    pub activity: String,
}

/// Arguments for the `trending` command.
#[derive(Args, Debug)]
pub struct TrendingArgs {
    /// Adopt idea number N (1-based) as the product context.
    #[arg(long, value_name = "N")]
    pub select: Option<usize>,
}

/// Product context management.
#[derive(Args, Debug)]
pub struct ContextCommand {
    #[command(subcommand)]
    pub action: ContextAction,
}

/// Context subcommands.
#[derive(Subcommand, Debug)]
pub enum ContextAction {
    /// Print the current product context.
    Show,

    /// Change one or more fields of the product context.
    Set(ContextSetArgs),

    /// Derive the product context from a product video URL.
    Import(ContextImportArgs),
}

/// Arguments for `context set`.
#[derive(Args, Debug)]
pub struct ContextSetArgs {
    /// Product name.
    #[arg(long)]
    pub name: Option<String>,

    /// What the product does.
    #[arg(long)]
    pub description: Option<String>,

    /// Key business goals.
    #[arg(long)]
    pub goals: Option<String>,
}

/// Arguments for `context import`.
#[derive(Args, Debug)]
pub struct ContextImportArgs {
    /// Video URL describing the product.
    pub url: String,
}

/// Arguments for the `render` command.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Markdown file to render. Reads stdin when omitted.
    pub file: Option<PathBuf>,

    /// Render without ANSI styling.
    #[arg(long)]
    pub plain: bool,

    /// Print the block structure as JSON.
    #[arg(long, conflicts_with = "plain")]
    pub json: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
