//! Generative model collaborator.
//!
//! The prompt compiler and renderer never talk to a model. Commands hand the
//! compiled text to the services in this module, which go through the
//! [`GenerativeModel`] trait. [`GeminiClient`] is the production implementation
//! and is built from an explicit [`ClientConfig`].

mod client;
mod gemini;
pub mod schema;
mod services;

pub use client::{GenerateOptions, GenerateRequest, GenerateResponse, GenerativeModel};
pub use gemini::{ClientConfig, GeminiClient};
pub use services::{
    NO_CONTENT, Okr, TrendingProject, analyze_video_context, generate_custom_timeline,
    generate_okrs, generate_trending_projects, generic_video_context, known_video_context,
    run_prompt,
};

use thiserror::Error;

/// Failures talking to the generative model.
#[derive(Error, Debug)]
pub enum LlmError {
    /// No API key in the configured environment variable.
    #[error("API key missing: set the {env} environment variable")]
    MissingApiKey { env: String },

    /// The API rejected the key.
    #[error("authentication rejected by the model API: {0}")]
    Auth(String),

    #[error("rate limited by the model API: {0}")]
    RateLimited(String),

    /// Any other non-success HTTP status.
    #[error("model API returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Connection, timeout or runtime failure before a reply arrived.
    #[error("could not reach the model API: {0}")]
    Transport(String),

    #[error("the model returned no content")]
    EmptyResponse,

    /// The reply was not the JSON shape that was asked for.
    #[error("the model returned malformed JSON: {0}")]
    MalformedPayload(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_names_the_variable() {
        let err = LlmError::MissingApiKey {
            env: "GEMINI_API_KEY".to_string(),
        };
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn http_error_includes_status() {
        let err = LlmError::Http {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "model API returned HTTP 500: boom");
    }
}
