use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::http_client::HttpClientTrait;
use crate::domain::{DomainError, LlmProvider, LlmRequest, LlmResponse, Message};

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Chat-completions provider for the OpenAI wire format.
///
/// Any compatible endpoint works through `with_base_url` (xAI Grok included).
#[derive(Debug)]
pub struct OpenAiProvider<C: HttpClientTrait> {
    client: C,
    auth_header: String,
    base_url: String,
    name: &'static str,
}

impl<C: HttpClientTrait> OpenAiProvider<C> {
    pub fn new(client: C, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, DEFAULT_OPENAI_BASE_URL)
    }

    pub fn with_base_url(
        client: C,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let auth_header = format!("Bearer {}", api_key.into());
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client,
            auth_header,
            base_url,
            name: "openai",
        }
    }

    /// Name reported in errors and logs
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    fn chat_completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }

    fn build_request(&self, model: &str, request: &LlmRequest) -> serde_json::Value {
        let messages: Vec<OpenAiMessage> = request
            .messages
            .iter()
            .map(OpenAiMessage::from_domain)
            .collect();

        let mut body = serde_json::json!({
            "model": model,
            "messages": messages,
            "stream": false,
        });

        if let Some(temp) = request.temperature {
            body["temperature"] = serde_json::json!(temp);
        }

        body
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![
            ("Authorization", self.auth_header.as_str()),
            ("Content-Type", "application/json"),
        ]
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<LlmResponse, DomainError> {
        let response: OpenAiResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider(self.name, format!("Failed to parse response: {}", e))
        })?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::provider(self.name, "No choices in response"))?;

        let message = Message::assistant(choice.message.content.unwrap_or_default());

        Ok(LlmResponse::new(response.id, response.model, message))
    }
}

#[async_trait]
impl<C: HttpClientTrait> LlmProvider for OpenAiProvider<C> {
    async fn chat(&self, model: &str, request: LlmRequest) -> Result<LlmResponse, DomainError> {
        let url = self.chat_completions_url();
        let body = self.build_request(model, &request);

        debug!("Sending chat completion to {} with model {}", self.name, model);

        let response = self
            .client
            .post_json(&url, self.headers(), &body)
            .await?;

        self.parse_response(response)
    }

    fn provider_name(&self) -> &'static str {
        self.name
    }
}

// OpenAI API types

#[derive(Debug, Serialize)]
struct OpenAiMessage {
    role: &'static str,
    content: String,
}

impl OpenAiMessage {
    fn from_domain(message: &Message) -> Self {
        Self {
            role: message.role.as_str(),
            content: message.content_text().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    id: String,
    model: String,
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::llm::http_client::mock::MockHttpClient;

    const TEST_URL: &str = "https://api.openai.com/v1/chat/completions";

    #[tokio::test]
    async fn test_openai_chat() {
        let mock_response = serde_json::json!({
            "id": "chatcmpl-123",
            "model": "gpt-4o-mini",
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": "{\"workflow_name\": \"FAQ\"}"
                },
                "finish_reason": "stop"
            }],
            "usage": {
                "prompt_tokens": 10,
                "completion_tokens": 8,
                "total_tokens": 18
            }
        });

        let client = MockHttpClient::new().with_response(TEST_URL, mock_response);
        let provider = OpenAiProvider::new(client, "test-api-key");

        let request = LlmRequest::builder()
            .system("Return JSON")
            .user("FAQ bot")
            .temperature(0.2)
            .build();

        let response = provider.chat("gpt-4o-mini", request).await.unwrap();

        assert_eq!(response.id, "chatcmpl-123");
        assert_eq!(response.content(), "{\"workflow_name\": \"FAQ\"}");

        let bodies = provider.client.bodies();
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0]["model"], "gpt-4o-mini");
    }

    #[test]
    fn test_request_body_shape() {
        let client = MockHttpClient::new().with_error(TEST_URL, "unused");
        let provider = OpenAiProvider::new(client, "k");

        let request = LlmRequest::builder()
            .system("sys")
            .user("usr")
            .temperature(0.2)
            .build();
        let body = provider.build_request("grok-2-latest", &request);

        assert_eq!(body["model"], "grok-2-latest");
        assert_eq!(body["stream"], false);
        assert_eq!(body["messages"][0], serde_json::json!({"role": "system", "content": "sys"}));
        assert_eq!(body["messages"][1], serde_json::json!({"role": "user", "content": "usr"}));
        assert!((body["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_extreme_usage_counts_are_ignored() {
        let mock_response = serde_json::json!({
            "id": "chatcmpl-9",
            "model": "gpt-4o-mini",
            "choices": [{"message": {"role": "assistant", "content": "{}"}}],
            "usage": {
                "prompt_tokens": u32::MAX,
                "completion_tokens": u32::MAX,
                "total_tokens": u64::MAX
            }
        });

        let client = MockHttpClient::new().with_response(TEST_URL, mock_response);
        let provider = OpenAiProvider::new(client, "k");

        let response = provider
            .chat("gpt-4o-mini", LlmRequest::builder().user("hi").build())
            .await
            .unwrap();

        assert_eq!(response.content(), "{}");
    }

    #[tokio::test]
    async fn test_openai_error_handling() {
        let client = MockHttpClient::new().with_error(TEST_URL, "API key invalid");
        let provider = OpenAiProvider::new(client, "invalid-key");

        let request = LlmRequest::builder().user("Hello!").build();

        let result = provider.chat("gpt-4", request).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_empty_choices_is_error() {
        let client = MockHttpClient::new().with_response(
            TEST_URL,
            serde_json::json!({"id": "x", "model": "m", "choices": []}),
        );
        let provider = OpenAiProvider::new(client, "k");

        let result = provider
            .chat("m", LlmRequest::builder().user("hi").build())
            .await;

        assert!(matches!(result, Err(DomainError::Provider { .. })));
    }

    #[tokio::test]
    async fn test_custom_base_url_and_name() {
        let custom_url = "https://api.x.ai/v1/chat/completions";
        let mock_response = serde_json::json!({
            "id": "grok-1",
            "model": "grok-2-latest",
            "choices": [{
                "message": { "role": "assistant", "content": "ok" },
                "finish_reason": "stop"
            }]
        });

        let client = MockHttpClient::new().with_response(custom_url, mock_response);
        let provider =
            OpenAiProvider::with_base_url(client, "test-key", "https://api.x.ai/").with_name("grok");

        let response = provider
            .chat("grok-2-latest", LlmRequest::builder().user("Test").build())
            .await
            .unwrap();

        assert_eq!(response.id, "grok-1");
        assert_eq!(provider.provider_name(), "grok");
    }
}
