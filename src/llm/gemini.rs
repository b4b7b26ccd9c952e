//! HTTP client for the Gemini `generateContent` endpoint.

use super::LlmError;
use super::client::{GenerateRequest, GenerateResponse, GenerativeModel};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Explicit connection settings for the generative API.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without trailing slash, e.g. `https://generativelanguage.googleapis.com`.
    pub base_url: String,
    pub model: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// A `GenerativeModel` backed by the Gemini REST API.
pub struct GeminiClient {
    http: Client,
    config: ClientConfig,
}

impl GeminiClient {
    /// Build a client from explicit settings.
    pub fn new(config: ClientConfig) -> Result<Self, LlmError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LlmError::Transport(format!("failed to create HTTP client: {}", e)))?;
        Ok(Self { http, config })
    }

    /// Full URL of the generation endpoint for the configured model.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, LlmError> {
        let body = WireRequest::from_request(request);
        debug!(
            model = %self.config.model,
            prompt_chars = request.prompt.chars().count(),
            structured = request.schema.is_some(),
            "sending generateContent request"
        );

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Transport(format!(
                        "request timed out after {}s",
                        self.config.timeout.as_secs()
                    ))
                } else if e.is_connect() {
                    LlmError::Transport(format!("unable to reach {}: {}", self.config.base_url, e))
                } else {
                    LlmError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            warn!(status = status.as_u16(), "generateContent request failed");
            return Err(status_error(status, body));
        }

        let reply: WireResponse = response
            .json()
            .await
            .map_err(|e| LlmError::MalformedPayload(format!("unexpected API response: {}", e)))?;

        let text = reply.text().ok_or(LlmError::EmptyResponse)?;
        debug!(reply_chars = text.chars().count(), "received generateContent reply");
        Ok(GenerateResponse { text })
    }
}

fn status_error(status: StatusCode, body: String) -> LlmError {
    match status.as_u16() {
        401 | 403 => LlmError::Auth(body),
        429 => LlmError::RateLimited(body),
        code => LlmError::Http { status: code, body },
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireRequest<'a> {
    contents: Vec<WireContent<'a>>,
    #[serde(skip_serializing_if = "WireGenerationConfig::is_empty")]
    generation_config: WireGenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct WireContent<'a> {
    role: &'static str,
    parts: Vec<WirePart<'a>>,
}

#[derive(Debug, Serialize)]
struct WirePart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireGenerationConfig<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<&'a Value>,
}

impl WireGenerationConfig<'_> {
    fn is_empty(&self) -> bool {
        self.temperature.is_none()
            && self.response_mime_type.is_none()
            && self.response_schema.is_none()
    }
}

impl<'a> WireRequest<'a> {
    fn from_request(request: &'a GenerateRequest) -> Self {
        Self {
            contents: vec![WireContent {
                role: "user",
                parts: vec![WirePart {
                    text: &request.prompt,
                }],
            }],
            generation_config: WireGenerationConfig {
                temperature: request.options.temperature,
                response_mime_type: request.schema.as_ref().map(|_| "application/json"),
                response_schema: request.schema.as_ref(),
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct WireResponse {
    #[serde(default)]
    candidates: Vec<WireCandidate>,
}

#[derive(Debug, Deserialize)]
struct WireCandidate {
    #[serde(default)]
    content: Option<WireCandidateContent>,
}

#[derive(Debug, Deserialize)]
struct WireCandidateContent {
    #[serde(default)]
    parts: Vec<WireResponsePart>,
}

#[derive(Debug, Deserialize)]
struct WireResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl WireResponse {
    /// Concatenated text parts of the first candidate, if any.
    fn text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ENDPOINT: &str = "/v1beta/models/test-model:generateContent";

    fn client_for(server: &MockServer) -> GeminiClient {
        GeminiClient::new(ClientConfig {
            base_url: server.uri(),
            model: "test-model".to_string(),
            api_key: "test-key".to_string(),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    fn reply(parts: Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "role": "model", "parts": parts } }]
        }))
    }

    #[test]
    fn wire_request_for_text_prompt_has_no_generation_config() {
        let request = GenerateRequest::text("hi");
        let body = serde_json::to_value(WireRequest::from_request(&request)).unwrap();
        assert_eq!(
            body,
            json!({ "contents": [{ "role": "user", "parts": [{ "text": "hi" }] }] })
        );
    }

    #[test]
    fn wire_request_for_schema_sets_json_mime_type() {
        let request = GenerateRequest::json("list", json!({"type": "ARRAY"})).with_temperature(0.5);
        let body = serde_json::to_value(WireRequest::from_request(&request)).unwrap();
        assert_eq!(
            body["generationConfig"],
            json!({
                "temperature": 0.5,
                "responseMimeType": "application/json",
                "responseSchema": { "type": "ARRAY" }
            })
        );
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let config = ClientConfig {
            base_url: "http://x".to_string(),
            model: "m".to_string(),
            api_key: "super-secret".to_string(),
            timeout: Duration::from_secs(1),
        };
        let printed = format!("{:?}", config);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }

    #[tokio::test]
    async fn successful_generation_returns_joined_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "contents": [{ "role": "user", "parts": [{ "text": "Write a PR/FAQ" }] }],
                "generationConfig": { "temperature": 0.8 }
            })))
            .respond_with(reply(json!([{ "text": "## Press " }, { "text": "Release" }])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let response = client
            .generate(&GenerateRequest::text("Write a PR/FAQ").with_temperature(0.8))
            .await
            .unwrap();

        assert_eq!(response.text, "## Press Release");
    }

    #[tokio::test]
    async fn unauthorized_maps_to_auth_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate(&GenerateRequest::text("x"))
            .await
            .unwrap_err();

        match err {
            LlmError::Auth(body) => assert!(body.contains("API key not valid")),
            other => panic!("expected Auth, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn too_many_requests_maps_to_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(429).set_body_string("quota"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate(&GenerateRequest::text("x"))
            .await
            .unwrap_err();

        assert!(matches!(err, LlmError::RateLimited(_)));
    }

    #[tokio::test]
    async fn server_error_keeps_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate(&GenerateRequest::text("x"))
            .await
            .unwrap_err();

        match err {
            LlmError::Http { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "overloaded");
            }
            other => panic!("expected Http, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn missing_candidates_is_empty_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate(&GenerateRequest::text("x"))
            .await
            .unwrap_err();

        assert!(matches!(err, LlmError::EmptyResponse));
    }

    #[tokio::test]
    async fn non_json_success_body_is_malformed_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate(&GenerateRequest::text("x"))
            .await
            .unwrap_err();

        assert!(matches!(err, LlmError::MalformedPayload(_)));
    }

    #[tokio::test]
    async fn unreachable_server_is_transport_error() {
        let client = GeminiClient::new(ClientConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            model: "test-model".to_string(),
            api_key: "k".to_string(),
            timeout: Duration::from_secs(2),
        })
        .unwrap();

        let err = client.generate(&GenerateRequest::text("x")).await.unwrap_err();
        assert!(matches!(err, LlmError::Transport(_)));
    }

    #[test]
    fn endpoint_includes_model() {
        let client = GeminiClient::new(ClientConfig {
            base_url: "https://example.test".to_string(),
            model: "gemini-2.5-flash".to_string(),
            api_key: "k".to_string(),
            timeout: Duration::from_secs(1),
        })
        .unwrap();
        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
