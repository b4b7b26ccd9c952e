//! Configuration types and defaults for promptline.

use serde::{Deserialize, Serialize};

/// Sampling temperatures per kind of model request.
///
/// Trending-project ideation has no entry; it always uses the model default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Temperatures {
    /// Free-form mega prompt runs.
    pub prompt: f32,
    /// OKR generation.
    pub okr: f32,
    /// Product context extraction from a video URL.
    pub context: f32,
    /// Custom timeline generation.
    pub timeline: f32,
}

impl Default for Temperatures {
    fn default() -> Self {
        Self {
            prompt: 0.8,
            okr: 0.7,
            context: 0.7,
            timeline: 0.7,
        }
    }
}

impl Temperatures {
    /// Named values, for validation messages.
    pub(crate) fn entries(&self) -> [(&'static str, f32); 4] {
        [
            ("prompt", self.prompt),
            ("okr", self.okr),
            ("context", self.context),
            ("timeline", self.timeline),
        ]
    }
}

/// Highest temperature accepted by the generative API.
pub const MAX_TEMPERATURE: f32 = 2.0;

// Default value functions for serde
pub(crate) fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}
pub(crate) fn default_api_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}
pub(crate) fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}
pub(crate) fn default_request_timeout_seconds() -> u64 {
    60
}
