//! Implementation of the `promptline okrs` command.

use super::{block_on, connect_model};
use crate::cli::OkrsArgs;
use crate::error::Result;
use crate::llm::{GenerativeModel, Okr, generate_okrs};
use crate::timeline::Activity;
use crate::workspace::Session;

/// Execute the `promptline okrs` command.
pub fn cmd_okrs(args: OkrsArgs) -> Result<()> {
    let session = Session::load()?;
    let activity = session.timeline.require_activity(&args.activity)?;
    let model = connect_model(&session.config)?;

    let okrs = okrs_for(&session, activity, &model)?;
    print!("{}", format_okrs(activity, &okrs));
    Ok(())
}

pub(crate) fn okrs_for(
    session: &Session,
    activity: &Activity,
    model: &dyn GenerativeModel,
) -> Result<Vec<Okr>> {
    let okrs = block_on(generate_okrs(
        model,
        activity,
        &session.product,
        session.config.temperatures.okr,
    ))??;
    Ok(okrs)
}

pub(crate) fn format_okrs(activity: &Activity, okrs: &[Okr]) -> String {
    let mut out = String::new();
    out.push_str(&format!("OKRs for {}\n", activity.title));
    out.push('\n');

    if okrs.is_empty() {
        out.push_str("The model returned no OKRs.\n");
        return out;
    }

    for (i, okr) in okrs.iter().enumerate() {
        out.push_str(&format!("Objective {}: {}\n", i + 1, okr.objective));
        for key_result in &okr.key_results {
            out.push_str(&format!("  • {}\n", key_result));
        }
        out.push('\n');
    }
    out
}
