//! The generative model seam.
//!
//! Everything that talks to a model goes through [`GenerativeModel`], so the
//! services can run against the HTTP client in production and a scripted
//! double in tests.

use super::LlmError;
use async_trait::async_trait;
use serde_json::Value;

/// Sampling options for a single request.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GenerateOptions {
    /// Sampling temperature; `None` leaves the model default.
    pub temperature: Option<f32>,
}

/// A single generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    /// The compiled prompt.
    pub prompt: String,
    /// Optional response schema; when set the model must answer with JSON.
    pub schema: Option<Value>,
    pub options: GenerateOptions,
}

impl GenerateRequest {
    /// A free-form text request.
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            schema: None,
            options: GenerateOptions::default(),
        }
    }

    /// A request constrained to JSON matching `schema`.
    pub fn json(prompt: impl Into<String>, schema: Value) -> Self {
        Self {
            prompt: prompt.into(),
            schema: Some(schema),
            options: GenerateOptions::default(),
        }
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.options.temperature = Some(temperature);
        self
    }
}

/// The model's reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResponse {
    /// Reply text; JSON text when the request carried a schema.
    pub text: String,
}

/// A hosted generative model.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Send one request and return the reply text.
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, LlmError>;
}
