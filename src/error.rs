//! Error types for the promptline CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! The template compiler and markdown renderer are total and never produce these;
//! errors only come from the surrounding file, config and model layers.

use crate::exit_codes;
use crate::llm::LlmError;
use thiserror::Error;

/// Main error type for promptline operations.
#[derive(Error, Debug)]
pub enum PromptlineError {
    /// User provided invalid arguments or the workspace is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// A named activity, stage or project does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A config or state file could not be read, parsed or written.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The generative model could not produce a usable reply.
    #[error("Model request failed: {0}")]
    Llm(#[from] LlmError),
}

impl PromptlineError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptlineError::UserError(_) => exit_codes::USER_ERROR,
            PromptlineError::NotFound(_) => exit_codes::USER_ERROR,
            PromptlineError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            PromptlineError::Llm(_) => exit_codes::LLM_FAILURE,
        }
    }
}

/// Result type alias for promptline operations.
pub type Result<T> = std::result::Result<T, PromptlineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = PromptlineError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn not_found_is_a_user_error() {
        let err = PromptlineError::NotFound("activity 'x' not found".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn config_error_has_correct_exit_code() {
        let err = PromptlineError::ConfigError("bad yaml".to_string());
        assert_eq!(err.exit_code(), exit_codes::CONFIG_ERROR);
    }

    #[test]
    fn llm_error_converts_and_maps_to_llm_failure() {
        let err: PromptlineError = LlmError::EmptyResponse.into();
        assert_eq!(err.exit_code(), exit_codes::LLM_FAILURE);
        assert!(err.to_string().starts_with("Model request failed: "));
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = PromptlineError::ConfigError("model must not be empty".to_string());
        assert_eq!(err.to_string(), "Configuration error: model must not be empty");
    }
}
