//! Product context: the record substituted into prompt templates.
//!
//! The context is persisted as `.promptline/product.yaml`:
//!
//! ```yaml
//! name: New AI Product
//! description: A revolutionary tool that uses LLMs to automate mundane tasks.
//! goals: Launch MVP in 3 months and get 500 active users.
//! ```
//!
//! It is replaced wholesale on every edit or import; no history is kept.

use crate::error::{PromptlineError, Result};
use crate::fs::atomic_write_file;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name, description and goals of the product being planned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductContext {
    pub name: String,
    pub description: String,
    pub goals: String,
}

impl Default for ProductContext {
    fn default() -> Self {
        Self {
            name: "New AI Product".to_string(),
            description: "A revolutionary tool that uses LLMs to automate mundane tasks."
                .to_string(),
            goals: "Launch MVP in 3 months and get 500 active users.".to_string(),
        }
    }
}

/// Partial edit of a product context; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub goals: Option<String>,
}

impl ContextUpdate {
    /// Whether the update would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.goals.is_none()
    }
}

impl ProductContext {
    /// A context with every field empty.
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            goals: String::new(),
        }
    }

    /// Return a new context with the given fields replaced.
    pub fn updated(&self, update: ContextUpdate) -> Self {
        Self {
            name: update.name.unwrap_or_else(|| self.name.clone()),
            description: update.description.unwrap_or_else(|| self.description.clone()),
            goals: update.goals.unwrap_or_else(|| self.goals.clone()),
        }
    }

    /// Load a context from a YAML file.
    ///
    /// Missing fields become empty strings, so a partially written file still
    /// compiles with fallbacks rather than failing.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptlineError::ConfigError(format!(
                "failed to read product context '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse a context from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::empty());
        }
        serde_yaml::from_str::<PartialContext>(yaml)
            .map(PartialContext::into_context)
            .map_err(|e| {
                PromptlineError::ConfigError(format!("failed to parse product context YAML: {}", e))
            })
    }

    /// Serialize the context to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PromptlineError::ConfigError(format!("failed to serialize product context: {}", e))
        })
    }

    /// Atomically write the context to a YAML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        atomic_write_file(path, &self.to_yaml()?)
    }
}

/// On-disk shape where absent fields mean empty, not the built-in defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PartialContext {
    name: String,
    description: String,
    goals: String,
}

impl PartialContext {
    fn into_context(self) -> ProductContext {
        ProductContext {
            name: self.name,
            description: self.description,
            goals: self.goals,
        }
    }
}
