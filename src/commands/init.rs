//! Implementation of the `promptline init` command.
//!
//! Creates `.promptline/` in the current directory with a default
//! `config.yaml` and the starter `product.yaml`. Running it again keeps
//! existing files unless `--force` is given.

use crate::cli::InitArgs;
use crate::config::Config;
use crate::error::{PromptlineError, Result};
use crate::fs::remove_if_exists;
use crate::product::ProductContext;
use crate::workspace::{CONFIG_FILE, PRODUCT_FILE, TIMELINE_FILE, Workspace};
use std::path::Path;
use tracing::info;

/// What happened to each workspace file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FileOutcome {
    Created,
    Overwritten,
    Kept,
    Removed,
}

/// Result of initialising a workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InitReport {
    pub files: Vec<(&'static str, FileOutcome)>,
}

/// Execute the `promptline init` command.
pub fn cmd_init(args: InitArgs) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|e| {
        PromptlineError::UserError(format!("failed to get current working directory: {}", e))
    })?;
    let workspace = Workspace::at(&cwd);

    let report = init_workspace(&workspace, args.force)?;

    println!("Initialized promptline workspace at {}", workspace.dir.display());
    for (name, outcome) in &report.files {
        match outcome {
            FileOutcome::Created => println!("  created     {}", name),
            FileOutcome::Overwritten => println!("  overwritten {}", name),
            FileOutcome::Kept => println!("  kept        {} (use --force to overwrite)", name),
            FileOutcome::Removed => println!("  removed     {}", name),
        }
    }
    println!();
    println!("Next: `promptline context set --name ...` then `promptline timeline`.");

    Ok(())
}

/// Create or refresh the workspace files.
pub(crate) fn init_workspace(workspace: &Workspace, force: bool) -> Result<InitReport> {
    std::fs::create_dir_all(&workspace.dir).map_err(|e| {
        PromptlineError::UserError(format!(
            "failed to create workspace directory '{}': {}",
            workspace.dir.display(),
            e
        ))
    })?;

    let mut files = Vec::new();

    let outcome = write_unless_present(&workspace.config_path(), force, |path| {
        Config::default().save(path)
    })?;
    files.push((CONFIG_FILE, outcome));

    let outcome = write_unless_present(&workspace.product_path(), force, |path| {
        ProductContext::default().save(path)
    })?;
    files.push((PRODUCT_FILE, outcome));

    if force && remove_if_exists(workspace.timeline_path())? {
        files.push((TIMELINE_FILE, FileOutcome::Removed));
    }

    info!(dir = %workspace.dir.display(), force, "initialized workspace");
    Ok(InitReport { files })
}

fn write_unless_present(
    path: &Path,
    force: bool,
    write: impl FnOnce(&Path) -> Result<()>,
) -> Result<FileOutcome> {
    let existed = path.exists();
    if existed && !force {
        return Ok(FileOutcome::Kept);
    }
    write(path)?;
    Ok(if existed {
        FileOutcome::Overwritten
    } else {
        FileOutcome::Created
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::Timeline;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_defaults() {
        let temp = TempDir::new().unwrap();
        let ws = Workspace::at(temp.path());

        let report = init_workspace(&ws, false).unwrap();

        assert_eq!(
            report.files,
            vec![
                (CONFIG_FILE, FileOutcome::Created),
                (PRODUCT_FILE, FileOutcome::Created)
            ]
        );
        assert_eq!(Config::load(ws.config_path()).unwrap(), Config::default());
        assert_eq!(
            ProductContext::load(ws.product_path()).unwrap(),
            ProductContext::default()
        );
    }

    #[test]
    fn test_init_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let ws = Workspace::at(temp.path());
        init_workspace(&ws, false).unwrap();

        let edited = ProductContext {
            name: "Clip Coach".to_string(),
            ..ProductContext::default()
        };
        edited.save(ws.product_path()).unwrap();

        let report = init_workspace(&ws, false).unwrap();

        assert!(report.files.iter().all(|(_, o)| *o == FileOutcome::Kept));
        assert_eq!(ProductContext::load(ws.product_path()).unwrap(), edited);
    }

    #[test]
    fn test_init_force_resets_everything() {
        let temp = TempDir::new().unwrap();
        let ws = Workspace::at(temp.path());
        init_workspace(&ws, false).unwrap();
        ProductContext::empty().save(ws.product_path()).unwrap();
        Timeline::builtin().save(ws.timeline_path()).unwrap();

        let report = init_workspace(&ws, true).unwrap();

        assert_eq!(
            report.files,
            vec![
                (CONFIG_FILE, FileOutcome::Overwritten),
                (PRODUCT_FILE, FileOutcome::Overwritten),
                (TIMELINE_FILE, FileOutcome::Removed),
            ]
        );
        assert_eq!(
            ProductContext::load(ws.product_path()).unwrap(),
            ProductContext::default()
        );
        assert!(!ws.has_custom_timeline());
    }
}
