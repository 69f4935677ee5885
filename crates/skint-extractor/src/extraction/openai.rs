//! OpenAI-compatible chat completions provider using structured outputs.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use super::{ExtractionRequest, StructuredExtractor};
use crate::error::ExtractionError;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Longest slice of an error response body kept in [`ExtractionError`].
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Calls `POST {base_url}/chat/completions` with a strict `json_schema`
/// response format and returns the parsed message content.
pub struct OpenAiExtractor {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl OpenAiExtractor {
    /// Creates a provider pointed at the public OpenAI API.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, model: &str, timeout_secs: u64) -> Result<Self, ExtractionError> {
        Self::with_base_url(api_key, model, timeout_secs, DEFAULT_OPENAI_BASE_URL)
    }

    /// Creates a provider with a custom base URL (compatible gateways, or
    /// wiremock in tests).
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, ExtractionError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            model: model.to_owned(),
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
        })
    }

    fn request_body(&self, request: &ExtractionRequest<'_>) -> Value {
        json!({
            "model": self.model,
            "temperature": 0.1,
            "messages": [
                { "role": "system", "content": request.instruction },
                { "role": "user", "content": request.input }
            ],
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": request.schema.name,
                    "description": request.schema.description,
                    "strict": true,
                    "schema": request.schema.json_schema
                }
            }
        })
    }
}

impl StructuredExtractor for OpenAiExtractor {
    async fn extract(&self, request: &ExtractionRequest<'_>) -> Result<Value, ExtractionError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(request))
            .send()
            .await?;

        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(ExtractionError::Unauthorized {
                    status: status.as_u16(),
                });
            }
            StatusCode::TOO_MANY_REQUESTS => return Err(ExtractionError::RateLimited),
            _ if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                return Err(ExtractionError::UnexpectedStatus {
                    status: status.as_u16(),
                    body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
                });
            }
            _ => {}
        }

        let body = response.text().await?;
        let completion: Value = serde_json::from_str(&body).map_err(|e| {
            ExtractionError::MalformedResponse(format!("completion is not JSON: {e}"))
        })?;

        if let Some(usage) = completion.get("usage") {
            let prompt_tokens = usage.get("prompt_tokens").and_then(Value::as_u64);
            let completion_tokens = usage.get("completion_tokens").and_then(Value::as_u64);
            tracing::debug!(
                model = %self.model,
                ?prompt_tokens,
                ?completion_tokens,
                "extraction call completed"
            );
        }

        parse_completion(&completion)
    }
}

/// Pull the candidate object out of a chat completion body.
fn parse_completion(completion: &Value) -> Result<Value, ExtractionError> {
    let message = completion
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .ok_or_else(|| {
            ExtractionError::MalformedResponse("missing choices[0].message".to_string())
        })?;

    if let Some(refusal) = message.get("refusal").and_then(Value::as_str) {
        return Err(ExtractionError::Refused(refusal.to_string()));
    }

    let content = message
        .get("content")
        .and_then(Value::as_str)
        .ok_or_else(|| ExtractionError::MalformedResponse("message has no content".to_string()))?;

    serde_json::from_str(content).map_err(|e| {
        ExtractionError::MalformedResponse(format!("message content is not JSON: {e}"))
    })
}
