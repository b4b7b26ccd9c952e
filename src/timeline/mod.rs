//! Product lifecycle timeline: stages and the activities within them.
//!
//! A timeline is either the built-in AI product timeline or a custom one
//! generated by the model and saved to `.promptline/timeline.yaml`. Field names
//! follow the JSON the model is asked to produce (`timeLabel`, `selfService`,
//! `megaPromptTemplate`, ...), so a generated timeline deserializes directly.
//!
//! ```yaml
//! stages:
//!   - id: DISCOVERY
//!     label: Discovery & Feasibility
//!     timeLabel: Month 1
//!     activities:
//!       selfService:
//!         - id: problem-def
//!           title: Problem Definition & User Needs
//!           description: Identify the core user problem.
//!           megaPromptTemplate: "Act as a Lead Product Manager. I am building '${productName}'."
//!           okrPromptTemplate: "Create 3 OKRs for '${productName}'."
//! ```

mod builtin;

#[cfg(test)]
mod tests;

use crate::error::{PromptlineError, Result};
use crate::fs::atomic_write_file;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// The four lifecycle stages, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StageId {
    Discovery,
    Definition,
    Development,
    Launch,
}

impl StageId {
    /// All stage ids in lifecycle order.
    pub const ALL: [StageId; 4] = [
        StageId::Discovery,
        StageId::Definition,
        StageId::Development,
        StageId::Launch,
    ];

    /// The serialized form (`DISCOVERY`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            StageId::Discovery => "DISCOVERY",
            StageId::Definition => "DEFINITION",
            StageId::Development => "DEVELOPMENT",
            StageId::Launch => "LAUNCH",
        }
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single lifecycle activity with its prompt templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub mega_prompt_template: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub okr_prompt_template: Option<String>,
}

impl Activity {
    /// Case-insensitive substring match on title or description.
    ///
    /// An empty term matches every activity.
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }
}

/// Activities of a stage, grouped by delivery mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageActivities {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub self_service: Vec<Activity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub service: Vec<Activity>,
}

/// One stage of the lifecycle timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    pub id: StageId,
    pub label: String,
    pub time_label: String,
    #[serde(default)]
    pub activities: StageActivities,
}

impl Stage {
    /// Self-service activities first, then service activities.
    pub fn activities(&self) -> impl Iterator<Item = &Activity> {
        self.activities
            .self_service
            .iter()
            .chain(self.activities.service.iter())
    }
}

/// A stage together with the activities that survived a search.
#[derive(Debug, Clone)]
pub struct StageMatches<'a> {
    pub stage: &'a Stage,
    pub activities: Vec<&'a Activity>,
}

impl StageMatches<'_> {
    /// Whether the search left this stage without visible activities.
    pub fn is_dimmed(&self) -> bool {
        self.activities.is_empty()
    }
}

/// An ordered list of lifecycle stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub stages: Vec<Stage>,
}

impl Timeline {
    /// The built-in AI product timeline.
    pub fn builtin() -> Self {
        builtin::timeline()
    }

    /// All activities across stages, in stage order.
    pub fn activities(&self) -> impl Iterator<Item = &Activity> {
        self.stages.iter().flat_map(Stage::activities)
    }

    /// Find an activity by id.
    pub fn find_activity(&self, id: &str) -> Option<&Activity> {
        self.activities().find(|activity| activity.id == id)
    }

    /// Find an activity by id, with a user-facing error when it is missing.
    pub fn require_activity(&self, id: &str) -> Result<&Activity> {
        self.find_activity(id).ok_or_else(|| {
            let known: Vec<&str> = self.activities().map(|a| a.id.as_str()).collect();
            PromptlineError::NotFound(format!(
                "activity '{}' not found.\n\n\
                 Known activities: {}\n\n\
                 Use `promptline timeline` to list them.",
                id,
                known.join(", ")
            ))
        })
    }

    /// Filter every stage's activities by a search term.
    ///
    /// Stages are always returned, in order, so callers can show stages with no
    /// match as dimmed rather than dropping them.
    pub fn search(&self, term: &str) -> Vec<StageMatches<'_>> {
        self.stages
            .iter()
            .map(|stage| StageMatches {
                stage,
                activities: stage.activities().filter(|a| a.matches(term)).collect(),
            })
            .collect()
    }

    /// Check structural rules a usable timeline must satisfy.
    ///
    /// - at least one stage
    /// - activity ids are non-empty and unique across the timeline
    /// - every activity has a non-empty mega prompt template
    pub fn validate(&self) -> Result<()> {
        if self.stages.is_empty() {
            return Err(PromptlineError::ConfigError(
                "timeline validation failed: timeline has no stages".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for activity in self.activities() {
            if activity.id.trim().is_empty() {
                return Err(PromptlineError::ConfigError(format!(
                    "timeline validation failed: activity '{}' has an empty id",
                    activity.title
                )));
            }
            if !seen.insert(activity.id.as_str()) {
                return Err(PromptlineError::ConfigError(format!(
                    "timeline validation failed: duplicate activity id '{}'",
                    activity.id
                )));
            }
            if activity.mega_prompt_template.trim().is_empty() {
                return Err(PromptlineError::ConfigError(format!(
                    "timeline validation failed: activity '{}' has an empty megaPromptTemplate",
                    activity.id
                )));
            }
        }

        Ok(())
    }

    /// Load a timeline from a YAML file and validate it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptlineError::ConfigError(format!(
                "failed to read timeline '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse and validate a timeline from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let timeline: Timeline = serde_yaml::from_str(yaml).map_err(|e| {
            PromptlineError::ConfigError(format!("failed to parse timeline YAML: {}", e))
        })?;
        timeline.validate()?;
        Ok(timeline)
    }

    /// Serialize the timeline to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PromptlineError::ConfigError(format!("failed to serialize timeline: {}", e))
        })
    }

    /// Atomically write the timeline to a YAML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        atomic_write_file(path, &self.to_yaml()?)
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::builtin()
    }
}
