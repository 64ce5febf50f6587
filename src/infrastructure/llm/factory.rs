use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use super::http_client::HttpClient;
use super::openai::{OpenAiProvider, DEFAULT_OPENAI_BASE_URL};
use crate::config::{LlmProviderKind, LlmSettings};
use crate::domain::{DomainError, LlmProvider};

const DEFAULT_GROK_BASE_URL: &str = "https://api.x.ai";

/// Provider handle plus the model to request from it
#[derive(Debug, Clone)]
pub struct ConfiguredProvider {
    pub provider: Arc<dyn LlmProvider>,
    pub model: String,
}

/// Factory for creating LLM providers
#[derive(Debug)]
pub struct LlmProviderFactory;

impl LlmProviderFactory {
    /// Create the provider described by `settings`.
    ///
    /// Returns `Ok(None)` when no API key is configured.
    pub fn from_settings(settings: &LlmSettings) -> Result<Option<ConfiguredProvider>, DomainError> {
        let api_key = match settings.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => key,
            _ => return Ok(None),
        };

        let http_client = HttpClient::with_timeout(Duration::from_secs(settings.timeout_secs))?;
        let base_url = settings
            .base_url
            .clone()
            .unwrap_or_else(|| Self::default_base_url(&settings.provider).to_string());
        let model = settings
            .model
            .clone()
            .unwrap_or_else(|| Self::default_model(&settings.provider).to_string());

        let provider = OpenAiProvider::with_base_url(http_client, api_key, &base_url)
            .with_name(settings.provider.as_str());

        info!(
            "Configured {} provider at {} (model: {})",
            settings.provider.as_str(),
            base_url,
            model
        );

        Ok(Some(ConfiguredProvider {
            provider: Arc::new(provider),
            model,
        }))
    }

    pub fn default_base_url(kind: &LlmProviderKind) -> &'static str {
        match kind {
            LlmProviderKind::OpenAi => DEFAULT_OPENAI_BASE_URL,
            LlmProviderKind::Grok => DEFAULT_GROK_BASE_URL,
        }
    }

    pub fn default_model(kind: &LlmProviderKind) -> &'static str {
        match kind {
            LlmProviderKind::OpenAi => "gpt-4o-mini",
            LlmProviderKind::Grok => "grok-2-latest",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_api_key_means_no_provider() {
        let settings = LlmSettings::default();
        assert!(LlmProviderFactory::from_settings(&settings).unwrap().is_none());

        let settings = LlmSettings {
            api_key: Some("   ".to_string()),
            ..LlmSettings::default()
        };
        assert!(LlmProviderFactory::from_settings(&settings).unwrap().is_none());
    }

    #[test]
    fn test_grok_defaults() {
        let settings = LlmSettings {
            provider: LlmProviderKind::Grok,
            api_key: Some("xai-key".to_string()),
            ..LlmSettings::default()
        };

        let configured = LlmProviderFactory::from_settings(&settings).unwrap().unwrap();

        assert_eq!(configured.model, "grok-2-latest");
        assert_eq!(configured.provider.provider_name(), "grok");
    }

    #[test]
    fn test_explicit_model_wins() {
        let settings = LlmSettings {
            api_key: Some("sk-test".to_string()),
            model: Some("gpt-4o".to_string()),
            ..LlmSettings::default()
        };

        let configured = LlmProviderFactory::from_settings(&settings).unwrap().unwrap();

        assert_eq!(configured.model, "gpt-4o");
        assert_eq!(configured.provider.provider_name(), "openai");
    }

    #[tokio::test]
    async fn test_configured_timeout_applies() {
        use crate::domain::LlmRequest;
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({
                        "id": "late",
                        "model": "gpt-4o-mini",
                        "choices": [{"message": {"role": "assistant", "content": "{}"}}]
                    }))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&mock_server)
            .await;

        let settings = LlmSettings {
            api_key: Some("sk-test".to_string()),
            base_url: Some(mock_server.uri()),
            timeout_secs: 1,
            ..LlmSettings::default()
        };
        let configured = LlmProviderFactory::from_settings(&settings).unwrap().unwrap();

        let result = configured
            .provider
            .chat(&configured.model, LlmRequest::builder().user("hi").build())
            .await;

        assert!(matches!(result, Err(DomainError::Provider { .. })));
    }
}
