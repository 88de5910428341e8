/// LLM Client — the single point of entry for all Gemini API calls in Hookforge.
///
/// ARCHITECTURAL RULE: No other module may call the provider API directly.
/// All LLM interactions MUST go through this module.
///
/// Model: gemini-2.5-flash (hardcoded — do not make configurable to prevent drift)
///
/// One attempt per call. There is no retry or backoff here: a failed
/// generation is reported to the caller, who must resubmit.
use std::time::Duration;

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// Default REST base for the Generative Language API.
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// The model used for all LLM calls in Hookforge.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-2.5-flash";
/// Transport-level ceiling. The transform handler applies its own, tighter deadline.
const HTTP_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content (finish reason: {0})")]
    EmptyContent(String),

    #[error("LLM output violated the declared schema: {0}")]
    SchemaViolation(String),

    #[error("LLM call exceeded the {0:?} deadline")]
    Timeout(Duration),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl LlmResponse {
    /// Joins the text parts of the first candidate. `None` when there is no text at all.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        (!text.trim().is_empty()).then_some(text)
    }

    fn finish_reason(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.finish_reason.clone())
            .unwrap_or_else(|| "NONE".to_string())
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// The single LLM client used by all services in Hookforge.
/// Wraps the Gemini `generateContent` API with schema-constrained JSON output.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl LlmClient {
    pub fn new(api_key: String, base_url: String) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(HTTP_TIMEOUT).build()?,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, MODEL)
    }

    /// Makes a single structured-output call, returning the full response object.
    /// `schema` is sent as `generationConfig.responseSchema`.
    pub async fn call(
        &self,
        prompt: &str,
        system: &str,
        schema: &Value,
    ) -> Result<LlmResponse, LlmError> {
        let request_body = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part { text: system }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("LLM API returned {}: {}", status, body);
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: LlmResponse = response.json().await?;

        let usage = llm_response.usage_metadata.as_ref();
        debug!(
            "LLM call succeeded: prompt_tokens={}, output_tokens={}",
            usage.map_or(0, |u| u.prompt_token_count),
            usage.map_or(0, |u| u.candidates_token_count)
        );

        Ok(llm_response)
    }

    /// Calls the LLM with a response schema and deserializes the returned text as JSON.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
        schema: &Value,
    ) -> Result<T, LlmError> {
        let response = self.call(prompt, system, schema).await?;

        let text = response
            .text()
            .ok_or_else(|| LlmError::EmptyContent(response.finish_reason()))?;

        serde_json::from_str(strip_json_fences(&text)).map_err(LlmError::Parse)
    }
}

/// Strips a ```json fence if the model wraps its output in one despite the JSON mime type.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest).trim_start();
    rest.strip_suffix("```").map(str::trim).unwrap_or(rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Greeting {
        hello: String,
    }

    fn schema() -> Value {
        json!({"type": "OBJECT", "properties": {"hello": {"type": "STRING"}}})
    }

    fn client_for(server: &MockServer) -> LlmClient {
        LlmClient::new("test-key".to_string(), server.base_url()).unwrap()
    }

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        assert_eq!(strip_json_fences("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        assert_eq!(strip_json_fences("```\n{\"a\": 1}\n```"), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_json_fences_passthrough() {
        assert_eq!(strip_json_fences("  {\"a\": 1} "), "{\"a\": 1}");
    }

    #[test]
    fn test_response_text_joins_parts_of_first_candidate() {
        let response: LlmResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"parts": [{"text": "{\"hel"}, {"text": "lo\": 1}"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("{\"hello\": 1}"));
    }

    #[test]
    fn test_response_text_none_when_blocked() {
        let response: LlmResponse = serde_json::from_value(json!({
            "candidates": [{"finishReason": "SAFETY"}]
        }))
        .unwrap();
        assert!(response.text().is_none());
        assert_eq!(response.finish_reason(), "SAFETY");
    }

    #[tokio::test]
    async fn test_call_json_sends_schema_and_parses_text() {
        let server = MockServer::start_async().await;
        let mock = server.mock_async(|when, then| {
            when.method(POST)
                .path(format!("/models/{MODEL}:generateContent"))
                .header("x-goog-api-key", "test-key")
                .json_body_partial(
                    r#"{
                        "systemInstruction": {"parts": [{"text": "be brief"}]},
                        "contents": [{"role": "user", "parts": [{"text": "say hi"}]}],
                        "generationConfig": {"responseMimeType": "application/json"}
                    }"#,
                );
            then.status(200).json_body(json!({
                "candidates": [{"content": {"parts": [{"text": "{\"hello\": \"world\"}"}]}}],
                "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 4}
            }));
        })
        .await;

        let greeting: Greeting = client_for(&server)
            .call_json("say hi", "be brief", &schema())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(greeting.hello, "world");
    }

    #[tokio::test]
    async fn test_api_error_message_is_extracted() {
        let server = MockServer::start_async().await;
        server.mock_async(|when, then| {
            when.method(POST);
            then.status(429).json_body(json!({
                "error": {"code": 429, "message": "Resource exhausted", "status": "RESOURCE_EXHAUSTED"}
            }));
        })
        .await;

        let err = client_for(&server)
            .call_json::<Greeting>("say hi", "be brief", &schema())
            .await
            .unwrap_err();

        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "Resource exhausted");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_single_attempt_on_server_error() {
        let server = MockServer::start_async().await;
        let mock = server.mock_async(|when, then| {
            when.method(POST);
            then.status(503).body("unavailable");
        })
        .await;

        let err = client_for(&server)
            .call("say hi", "be brief", &schema())
            .await
            .unwrap_err();

        mock.assert_hits_async(1).await;
        assert!(matches!(err, LlmError::Api { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_empty_candidate_is_an_error() {
        let server = MockServer::start_async().await;
        server.mock_async(|when, then| {
            when.method(POST);
            then.status(200)
                .json_body(json!({"candidates": [{"finishReason": "MAX_TOKENS"}]}));
        })
        .await;

        let err = client_for(&server)
            .call_json::<Greeting>("say hi", "be brief", &schema())
            .await
            .unwrap_err();

        assert!(matches!(err, LlmError::EmptyContent(reason) if reason == "MAX_TOKENS"));
    }

    #[tokio::test]
    async fn test_non_json_text_is_a_parse_error() {
        let server = MockServer::start_async().await;
        server.mock_async(|when, then| {
            when.method(POST);
            then.status(200).json_body(json!({
                "candidates": [{"content": {"parts": [{"text": "Sure! Here you go"}]}}]
            }));
        })
        .await;

        let err = client_for(&server)
            .call_json::<Greeting>("say hi", "be brief", &schema())
            .await
            .unwrap_err();

        assert!(matches!(err, LlmError::Parse(_)));
    }
}
