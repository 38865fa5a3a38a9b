/// LLM Client — the single point of entry for all Gemini API calls.
///
/// ARCHITECTURAL RULE: No other module may call the provider directly.
/// All LLM interactions MUST go through this module.
///
/// Model: gemini-2.0-flash (hardcoded — do not make configurable to prevent drift)
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
/// The model used for all LLM calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-2.0-flash";
/// Low temperature favors consistent, factual output over creative variation.
/// A tunable, not a correctness invariant.
const TEMPERATURE: f32 = 0.3;
const MAX_OUTPUT_TOKENS: u32 = 4096;
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: InstructionContent<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct InstructionContent<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    temperature: f32,
    max_output_tokens: u32,
    response_mime_type: &'a str,
    /// OpenAPI-style schema the provider enforces on the response.
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

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    pub prompt_token_count: Option<u32>,
    pub candidates_token_count: Option<u32>,
}

impl LlmResponse {
    /// Extracts the text content from the first candidate's first text part.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|content| content.parts.iter().find_map(|p| p.text.as_deref()))
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// The single LLM client used by the analysis service.
/// Wraps the Gemini generateContent API with retry logic and structured
/// output helpers.
///
/// The client holds no credential: the caller supplies one per call and it is
/// sent as a request header, never stored or logged.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    base_url: String,
}

impl LlmClient {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: GEMINI_API_BASE.to_string(),
        }
    }

    /// Points the client at a different endpoint. Used by tests to target a
    /// mock server.
    #[cfg(test)]
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Makes a raw call to the Gemini API, returning the full response object.
    /// Retries on 429 (rate limit) and 5xx errors with exponential backoff.
    pub async fn call(
        &self,
        api_key: &str,
        prompt: &str,
        system: &str,
        response_schema: &Value,
    ) -> Result<LlmResponse, LlmError> {
        let request_body = GenerateContentRequest {
            system_instruction: InstructionContent {
                parts: vec![Part { text: system }],
            },
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
                response_mime_type: "application/json",
                response_schema,
            },
        };

        let url = format!("{}/models/{}:generateContent", self.base_url, MODEL);

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&url)
                .header("x-goog-api-key", api_key)
                .header("content-type", "application/json")
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                // Try to parse the provider's error message
                let message = serde_json::from_str::<GeminiError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let llm_response: LlmResponse = response.json().await?;

            if let Some(reason) = llm_response
                .candidates
                .first()
                .and_then(|c| c.finish_reason.as_deref())
            {
                if reason != "STOP" {
                    warn!("LLM finished with reason {reason}; output may be truncated");
                }
            }

            if let Some(usage) = &llm_response.usage_metadata {
                debug!(
                    "LLM call succeeded: prompt_tokens={:?}, candidate_tokens={:?}",
                    usage.prompt_token_count, usage.candidates_token_count
                );
            }

            return Ok(llm_response);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }

    /// Convenience method that calls the LLM and deserializes the text
    /// response as JSON. The response schema constrains the model to JSON,
    /// and the local parse is the authoritative check.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        api_key: &str,
        prompt: &str,
        system: &str,
        response_schema: &Value,
    ) -> Result<T, LlmError> {
        let response = self.call(api_key, prompt, system, response_schema).await?;

        let text = response.text().ok_or(LlmError::EmptyContent)?;

        // Strip markdown code fences in case the model wraps JSON in them
        let text = strip_json_fences(text);

        serde_json::from_str(text).map_err(LlmError::Parse)
    }
}

impl Default for LlmClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::{Method::POST, MockServer};
    use serde_json::json;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    fn schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": { "answer": { "type": "STRING" } },
            "required": ["answer"]
        })
    }

    #[derive(Debug, Deserialize)]
    struct Answer {
        answer: String,
    }

    #[tokio::test]
    async fn call_json_deserializes_candidate_text() {
        let server = MockServer::start_async().await;

        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(format!("/models/{MODEL}:generateContent"))
                    .header("x-goog-api-key", "test-key");
                then.status(200).json_body(json!({
                    "candidates": [{
                        "content": {
                            "parts": [{ "text": "{\"answer\": \"42\"}" }],
                            "role": "model"
                        },
                        "finishReason": "STOP"
                    }],
                    "usageMetadata": {
                        "promptTokenCount": 10,
                        "candidatesTokenCount": 5
                    }
                }));
            })
            .await;

        let client = LlmClient::with_base_url(server.base_url());
        let result: Answer = client
            .call_json("test-key", "prompt", "system", &schema())
            .await
            .expect("call_json");

        mock.assert();
        assert_eq!(result.answer, "42");
    }

    #[tokio::test]
    async fn call_surfaces_provider_error_message() {
        let server = MockServer::start_async().await;

        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(format!("/models/{MODEL}:generateContent"));
                then.status(400).json_body(json!({
                    "error": {
                        "code": 400,
                        "message": "API key not valid",
                        "status": "INVALID_ARGUMENT"
                    }
                }));
            })
            .await;

        let client = LlmClient::with_base_url(server.base_url());
        let err = client
            .call("bad-key", "prompt", "system", &schema())
            .await
            .expect_err("400 must not retry");

        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "API key not valid");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn call_retries_server_errors_until_exhausted() {
        let server = MockServer::start_async().await;

        let failing = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(format!("/models/{MODEL}:generateContent"));
                then.status(500).body("upstream hiccup");
            })
            .await;

        let client = LlmClient::with_base_url(server.base_url());

        let first = client.call("key", "prompt", "system", &schema()).await;
        assert!(first.is_err());
        // All attempts hit the failing mock
        assert_eq!(failing.hits_async().await, MAX_RETRIES as usize);
    }

    #[tokio::test]
    async fn call_json_rejects_empty_candidates() {
        let server = MockServer::start_async().await;

        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(format!("/models/{MODEL}:generateContent"));
                then.status(200).json_body(json!({ "candidates": [] }));
            })
            .await;

        let client = LlmClient::with_base_url(server.base_url());
        let err = client
            .call_json::<Answer>("key", "prompt", "system", &schema())
            .await
            .expect_err("empty candidates");

        assert!(matches!(err, LlmError::EmptyContent));
    }
}
