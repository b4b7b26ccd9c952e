//! Workspace discovery for promptline.
//!
//! A workspace is a directory containing `.promptline/`. Commands look for it
//! by walking up from the current working directory, so promptline can be
//! invoked from any subdirectory of a project.
//!
//! Layout:
//!
//! ```text
//! .promptline/
//!   config.yaml     model and request settings
//!   product.yaml    the product context
//!   timeline.yaml   optional AI-generated timeline (built-in one otherwise)
//! ```

use crate::config::Config;
use crate::error::{PromptlineError, Result};
use crate::product::ProductContext;
use crate::timeline::Timeline;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the workspace directory.
pub const WORKSPACE_DIR: &str = ".promptline";

pub const CONFIG_FILE: &str = "config.yaml";
pub const PRODUCT_FILE: &str = "product.yaml";
pub const TIMELINE_FILE: &str = "timeline.yaml";

/// Resolved paths of a promptline workspace. All paths are absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    /// Directory that contains `.promptline/`.
    pub root: PathBuf,
    /// The `.promptline/` directory itself.
    pub dir: PathBuf,
}

impl Workspace {
    /// Workspace rooted at `root`, whether or not it exists yet.
    pub fn at<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        let dir = root.join(WORKSPACE_DIR);
        Self { root, dir }
    }

    /// Find the nearest workspace at or above `start`.
    pub fn discover_from<P: AsRef<Path>>(start: P) -> Option<Self> {
        start
            .as_ref()
            .ancestors()
            .find(|dir| dir.join(WORKSPACE_DIR).is_dir())
            .map(Self::at)
    }

    /// Find the nearest workspace at or above the current directory.
    pub fn discover() -> Result<Option<Self>> {
        Ok(Self::discover_from(current_dir()?))
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    pub fn product_path(&self) -> PathBuf {
        self.dir.join(PRODUCT_FILE)
    }

    pub fn timeline_path(&self) -> PathBuf {
        self.dir.join(TIMELINE_FILE)
    }

    /// Whether an AI-generated timeline replaces the built-in one.
    pub fn has_custom_timeline(&self) -> bool {
        self.timeline_path().is_file()
    }

    /// Config from `config.yaml`, or defaults when the file is missing.
    pub fn load_config(&self) -> Result<Config> {
        let path = self.config_path();
        if path.is_file() {
            Config::load(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Product context from `product.yaml`, or the starter context when missing.
    pub fn load_product(&self) -> Result<ProductContext> {
        let path = self.product_path();
        if path.is_file() {
            ProductContext::load(path)
        } else {
            Ok(ProductContext::default())
        }
    }

    /// The custom timeline if one was saved, else the built-in timeline.
    pub fn load_timeline(&self) -> Result<Timeline> {
        if self.has_custom_timeline() {
            Timeline::load(self.timeline_path())
        } else {
            Ok(Timeline::builtin())
        }
    }
}

/// Everything a command reads: config, product context and timeline.
///
/// Outside a workspace the session holds defaults, so read-only commands
/// still work.
#[derive(Debug, Clone)]
pub struct Session {
    pub workspace: Option<Workspace>,
    pub config: Config,
    pub product: ProductContext,
    pub timeline: Timeline,
}

impl Session {
    /// Load the session for the current directory.
    pub fn load() -> Result<Self> {
        Self::load_from(current_dir()?)
    }

    /// Load the session for the workspace at or above `start`.
    pub fn load_from<P: AsRef<Path>>(start: P) -> Result<Self> {
        match Workspace::discover_from(start) {
            Some(workspace) => {
                debug!(root = %workspace.root.display(), "using workspace");
                Ok(Self {
                    config: workspace.load_config()?,
                    product: workspace.load_product()?,
                    timeline: workspace.load_timeline()?,
                    workspace: Some(workspace),
                })
            }
            None => {
                debug!("no workspace found, using defaults");
                Ok(Self::defaults())
            }
        }
    }

    /// A session with built-in defaults and no workspace.
    pub fn defaults() -> Self {
        Self {
            workspace: None,
            config: Config::default(),
            product: ProductContext::default(),
            timeline: Timeline::builtin(),
        }
    }

    /// The workspace, or a user error telling the user to run `init`.
    pub fn require_workspace(&self) -> Result<&Workspace> {
        self.workspace.as_ref().ok_or_else(not_initialized)
    }
}

/// Discover the workspace, returning an error if there is none.
///
/// Call this from commands that write state.
pub fn require_initialized_workspace() -> Result<Workspace> {
    Workspace::discover()?.ok_or_else(not_initialized)
}

fn not_initialized() -> PromptlineError {
    PromptlineError::UserError(format!(
        "promptline workspace not initialized.\n\
         No {} directory found here or in any parent directory.\n\n\
         Run `promptline init` to create one.",
        WORKSPACE_DIR
    ))
}

fn current_dir() -> Result<PathBuf> {
    env::current_dir().map_err(|e| {
        PromptlineError::UserError(format!("failed to get current working directory: {}", e))
    })
}
