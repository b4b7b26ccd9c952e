//! Implementation of the `promptline trending` command.

use super::{block_on, connect_model};
use crate::cli::TrendingArgs;
use crate::error::{PromptlineError, Result};
use crate::llm::{TrendingProject, generate_trending_projects};
use crate::product::ProductContext;
use crate::workspace::{Session, Workspace};
use tracing::info;

/// Execute the `promptline trending` command.
pub fn cmd_trending(args: TrendingArgs) -> Result<()> {
    let session = Session::load()?;
    // Adopting an idea writes product.yaml; check before spending a request.
    let workspace = match args.select {
        Some(_) => Some(session.require_workspace()?),
        None => None,
    };
    let model = connect_model(&session.config)?;

    let projects = block_on(generate_trending_projects(&model))??;
    print!("{}", format_projects(&projects));

    if let (Some(number), Some(workspace)) = (args.select, workspace) {
        let context = adopt_project(workspace, &projects, number)?;
        println!("Product context set to '{}'.", context.name);
    }
    Ok(())
}

pub(crate) fn format_projects(projects: &[TrendingProject]) -> String {
    let mut out = String::new();
    if projects.is_empty() {
        out.push_str("The model returned no product ideas.\n");
        return out;
    }

    for (i, project) in projects.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, project.title));
        out.push_str(&format!("   {}\n", project.description));
        if !project.tech_stack.is_empty() {
            out.push_str(&format!("   Stack: {}\n", project.tech_stack.join(", ")));
        }
        out.push('\n');
    }
    out
}

/// Save idea `number` (1-based) as the product context.
pub(crate) fn adopt_project(
    workspace: &Workspace,
    projects: &[TrendingProject],
    number: usize,
) -> Result<ProductContext> {
    let project = number
        .checked_sub(1)
        .and_then(|i| projects.get(i))
        .ok_or_else(|| {
            PromptlineError::UserError(format!(
                "no idea number {}; pick between 1 and {}",
                number,
                projects.len()
            ))
        })?;

    let context = project.to_product_context();
    context.save(workspace.product_path())?;
    info!(title = %project.title, "adopted trending project");
    Ok(context)
}
