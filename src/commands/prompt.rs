//! Implementation of the `promptline prompt` and `promptline run` commands.
//!
//! Both compile the selected activity's template with the product context.
//! `prompt` prints the result; `run` sends it to the model and renders the
//! reply as terminal text.

use super::{block_on, connect_model, output_style};
use crate::cli::{PromptArgs, RunArgs};
use crate::error::Result;
use crate::llm::{GenerativeModel, run_prompt};
use crate::product::ProductContext;
use crate::prompt::{Fallbacks, PromptKind, compile, placeholders, select_template};
use crate::render::{render, to_terminal};
use crate::timeline::Activity;
use crate::workspace::Session;

fn kind_for(okr: bool) -> PromptKind {
    if okr { PromptKind::Okr } else { PromptKind::Mega }
}

/// Execute the `promptline prompt` command.
pub fn cmd_prompt(args: PromptArgs) -> Result<()> {
    let session = Session::load()?;
    let activity = session.timeline.require_activity(&args.activity)?;
    let kind = kind_for(args.okr);

    if args.explain {
        print!("{}", explain_prompt(activity, kind, &session.product));
    } else {
        println!("{}", compile(select_template(activity, kind), &session.product));
    }
    Ok(())
}

/// The compiled prompt with a header describing how it was built.
pub(crate) fn explain_prompt(
    activity: &Activity,
    kind: PromptKind,
    context: &ProductContext,
) -> String {
    let template = select_template(activity, kind);
    let fallbacks = Fallbacks::DISPLAY;
    let mut out = String::new();

    out.push_str(&format!("Activity:     {} ({})\n", activity.title, activity.id));
    out.push_str(&format!("Template:     {}\n", kind.label()));

    let used = placeholders(template);
    if used.is_empty() {
        out.push_str("Placeholders: none\n");
    } else {
        out.push_str("Placeholders:\n");
        for placeholder in used {
            let value = placeholder.value(context);
            if value.is_empty() {
                out.push_str(&format!(
                    "  {:<24} -> {} (empty, fallback)\n",
                    placeholder.token(),
                    fallbacks.for_placeholder(placeholder)
                ));
            } else {
                out.push_str(&format!("  {:<24} -> {}\n", placeholder.token(), value));
            }
        }
    }

    out.push_str("---\n");
    out.push_str(&compile(template, context));
    out.push('\n');
    out
}

/// Execute the `promptline run` command.
pub fn cmd_run(args: RunArgs) -> Result<()> {
    let session = Session::load()?;
    let activity = session.timeline.require_activity(&args.activity)?;
    let model = connect_model(&session.config)?;

    let reply = run_activity(&session, activity, kind_for(args.okr), &model)?;

    if args.raw {
        println!("{}", reply);
    } else {
        print!("{}", to_terminal(&render(&reply), output_style(args.plain)));
    }
    Ok(())
}

/// Compile the activity's prompt and return the model's reply text.
pub(crate) fn run_activity(
    session: &Session,
    activity: &Activity,
    kind: PromptKind,
    model: &dyn GenerativeModel,
) -> Result<String> {
    let prompt = compile(select_template(activity, kind), &session.product);
    let reply = block_on(run_prompt(model, &prompt, session.config.temperatures.prompt))??;
    Ok(reply)
}
