//! Implementation of the `promptline timeline` commands.

use super::{block_on, connect_model};
use crate::cli::{TimelineAction, TimelineCommand};
use crate::error::Result;
use crate::fs::remove_if_exists;
use crate::llm::{GenerativeModel, generate_custom_timeline};
use crate::timeline::Timeline;
use crate::workspace::{Session, Workspace};
use tracing::info;

/// Dispatch timeline subcommands; no subcommand lists the timeline.
pub fn dispatch_timeline(cmd: TimelineCommand) -> Result<()> {
    match cmd.action {
        None => cmd_timeline_show(cmd.search.as_deref()),
        Some(TimelineAction::Generate) => cmd_timeline_generate(),
        Some(TimelineAction::Reset) => cmd_timeline_reset(),
    }
}

fn cmd_timeline_show(search: Option<&str>) -> Result<()> {
    let session = Session::load()?;
    let custom = session
        .workspace
        .as_ref()
        .is_some_and(Workspace::has_custom_timeline);
    print!("{}", format_timeline(&session.timeline, search, custom));
    Ok(())
}

fn cmd_timeline_generate() -> Result<()> {
    let session = Session::load()?;
    let workspace = session.require_workspace()?;
    let model = connect_model(&session.config)?;

    let timeline = generate_timeline(&session, workspace, &model)?;

    println!(
        "Generated a custom timeline for '{}' with {} stages and {} activities.",
        session.product.name,
        timeline.stages.len(),
        timeline.activities().count()
    );
    println!("Run `promptline timeline` to see it, or `promptline timeline reset` to undo.");
    Ok(())
}

/// Ask the model for a timeline and save it. The current timeline is left
/// untouched when generation fails.
pub(crate) fn generate_timeline(
    session: &Session,
    workspace: &Workspace,
    model: &dyn GenerativeModel,
) -> Result<Timeline> {
    let timeline = block_on(generate_custom_timeline(
        model,
        &session.product,
        session.config.temperatures.timeline,
    ))??;
    timeline.save(workspace.timeline_path())?;
    info!(stages = timeline.stages.len(), "saved custom timeline");
    Ok(timeline)
}

fn cmd_timeline_reset() -> Result<()> {
    let session = Session::load()?;
    let workspace = session.require_workspace()?;

    if remove_if_exists(workspace.timeline_path())? {
        println!("Removed the custom timeline; using the built-in timeline.");
    } else {
        println!("No custom timeline; already using the built-in timeline.");
    }
    Ok(())
}

/// Format the timeline, filtered by an optional search term.
///
/// Stages with no matching activity are kept and marked, so the lifecycle
/// order stays visible.
pub(crate) fn format_timeline(timeline: &Timeline, search: Option<&str>, custom: bool) -> String {
    let term = search.unwrap_or("");
    let matches = timeline.search(term);
    let mut out = String::new();

    let source = if custom { "custom" } else { "built-in" };
    out.push_str(&format!("Product lifecycle timeline ({})\n", source));
    if !term.is_empty() {
        out.push_str(&format!("Filter: \"{}\"\n", term));
    }
    out.push('\n');

    for stage_matches in &matches {
        let stage = stage_matches.stage;
        out.push_str(&format!(
            "{}  {} ({})\n",
            stage.id, stage.label, stage.time_label
        ));

        if stage_matches.is_dimmed() {
            out.push_str("    (no matching activities)\n");
        }
        for activity in &stage_matches.activities {
            out.push_str(&format!("    {:<20} {}\n", activity.id, activity.title));
            out.push_str(&format!("    {:<20} {}\n", "", activity.description));
        }
        out.push('\n');
    }

    let total: usize = matches.iter().map(|m| m.activities.len()).sum();
    if total == 0 && !term.is_empty() {
        out.push_str(&format!("No activities match \"{}\".\n", term));
    }

    out
}
