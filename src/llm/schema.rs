//! Response schemas for structured generation.
//!
//! These use the generative API's OpenAPI subset, with uppercase type names.

use crate::timeline::StageId;
use serde_json::{Value, json};

/// An array of `{ objective, keyResults[] }`.
pub fn okr_list() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "objective": { "type": "STRING", "description": "The high level objective" },
                "keyResults": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "List of 3 measurable key results"
                }
            },
            "required": ["objective", "keyResults"]
        }
    })
}

/// An array of `{ title, description, techStack[] }`.
pub fn trending_projects() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": { "type": "STRING" },
                "description": { "type": "STRING" },
                "techStack": { "type": "ARRAY", "items": { "type": "STRING" } }
            },
            "required": ["title", "description", "techStack"]
        }
    })
}

/// A single `{ name, description, goals }` object.
pub fn product_context() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING" },
            "description": { "type": "STRING" },
            "goals": { "type": "STRING" }
        },
        "required": ["name", "description", "goals"]
    })
}

fn activity() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "id": { "type": "STRING" },
            "title": { "type": "STRING" },
            "description": { "type": "STRING" },
            "megaPromptTemplate": { "type": "STRING" },
            "okrPromptTemplate": { "type": "STRING" }
        },
        "required": ["id", "title", "description", "megaPromptTemplate"]
    })
}

/// An array of stages whose ids are limited to the four lifecycle stages.
pub fn timeline() -> Value {
    let stage_ids: Vec<&str> = StageId::ALL.iter().map(|id| id.as_str()).collect();
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "STRING", "enum": stage_ids },
                "label": { "type": "STRING" },
                "timeLabel": { "type": "STRING" },
                "activities": {
                    "type": "OBJECT",
                    "properties": {
                        "selfService": { "type": "ARRAY", "items": activity() }
                    }
                }
            },
            "required": ["id", "label", "timeLabel", "activities"]
        }
    })
}
