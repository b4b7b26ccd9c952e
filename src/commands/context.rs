//! Implementation of the `promptline context` commands.

use super::{block_on, connect_model};
use crate::cli::{ContextAction, ContextCommand, ContextImportArgs, ContextSetArgs};
use crate::error::{PromptlineError, Result};
use crate::llm::{GenerativeModel, analyze_video_context, known_video_context};
use crate::product::{ContextUpdate, ProductContext};
use crate::workspace::{Session, Workspace};
use tracing::info;

/// Dispatch context subcommands.
pub fn dispatch_context(cmd: ContextCommand) -> Result<()> {
    match cmd.action {
        ContextAction::Show => cmd_context_show(),
        ContextAction::Set(args) => cmd_context_set(args),
        ContextAction::Import(args) => cmd_context_import(args),
    }
}

fn cmd_context_show() -> Result<()> {
    let session = Session::load()?;
    print!("{}", format_context(&session.product));
    if session.workspace.is_none() {
        println!();
        println!("(defaults; run `promptline init` to keep your own context)");
    }
    Ok(())
}

fn cmd_context_set(args: ContextSetArgs) -> Result<()> {
    let session = Session::load()?;
    let workspace = session.require_workspace()?;
    let update = ContextUpdate {
        name: args.name,
        description: args.description,
        goals: args.goals,
    };

    let context = apply_update(workspace, &session.product, update)?;
    print!("{}", format_context(&context));
    Ok(())
}

fn cmd_context_import(args: ContextImportArgs) -> Result<()> {
    let session = Session::load()?;
    let workspace = session.require_workspace()?;

    // The known walkthrough needs no model, so no API key either.
    let context = match known_video_context(&args.url) {
        Some(context) => context,
        None => {
            let model = connect_model(&session.config)?;
            import_context(&session, &model, &args.url)?
        }
    };

    context.save(workspace.product_path())?;
    info!(url = %args.url, "imported product context");
    print!("{}", format_context(&context));
    Ok(())
}

/// Derive a context from a video URL. Model failures give the generic context.
pub(crate) fn import_context(
    session: &Session,
    model: &dyn GenerativeModel,
    url: &str,
) -> Result<ProductContext> {
    block_on(analyze_video_context(
        model,
        url,
        session.config.temperatures.context,
    ))
}

/// Apply a partial edit and save it.
pub(crate) fn apply_update(
    workspace: &Workspace,
    current: &ProductContext,
    update: ContextUpdate,
) -> Result<ProductContext> {
    if update.is_empty() {
        return Err(PromptlineError::UserError(
            "nothing to update: pass --name, --description or --goals".to_string(),
        ));
    }

    let context = current.updated(update);
    context.save(workspace.product_path())?;
    Ok(context)
}

pub(crate) fn format_context(context: &ProductContext) -> String {
    let mut out = String::new();
    for (label, value) in [
        ("Name", &context.name),
        ("Description", &context.description),
        ("Goals", &context.goals),
    ] {
        let shown = if value.is_empty() { "(empty)" } else { value.as_str() };
        out.push_str(&format!("{:<12} {}\n", format!("{}:", label), shown));
    }
    out
}
