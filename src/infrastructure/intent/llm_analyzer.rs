//! LLM-backed intent analyzer
//!
//! Asks a chat model for a JSON workflow configuration and degrades to the
//! default configuration on any failure. There is no retry.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::prompts::{system_prompt, user_prompt};
use crate::domain::intent::{
    parse_intent_config, FallbackReason, IntentAnalysis, IntentAnalyzer, IntentConfig,
};
use crate::domain::{Language, LlmProvider, LlmRequest};

/// Low sampling temperature: the reply should be structure, not prose
pub const ANALYSIS_TEMPERATURE: f32 = 0.2;

/// Intent analyzer that prompts an LLM provider
#[derive(Debug)]
pub struct LlmIntentAnalyzer<P>
where
    P: LlmProvider + ?Sized,
{
    provider: Arc<P>,
    model: String,
}

impl<P: LlmProvider + ?Sized> LlmIntentAnalyzer<P> {
    pub fn new(provider: Arc<P>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_request(&self, user_input: &str, language: Language) -> LlmRequest {
        LlmRequest::builder()
            .system(system_prompt(language))
            .user(user_prompt(user_input, language))
            .temperature(ANALYSIS_TEMPERATURE)
            .build()
    }

    /// Analyze and report whether the model reply or the fallback was used
    pub async fn analyze_detailed(&self, user_input: &str, language: Language) -> IntentAnalysis {
        let request = self.build_request(user_input, language);

        debug!(
            "Analyzing intent with {} (model: {}, language: {})",
            self.provider.provider_name(),
            self.model,
            language
        );

        let response = match self.provider.chat(&self.model, request).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Intent analysis request failed, using default config: {}", e);
                return IntentAnalysis::fallback(language, FallbackReason::Transport(e.to_string()));
            }
        };

        match parse_intent_config(response.content()) {
            Ok(config) => {
                info!(
                    "Intent analysis produced workflow {:?} with {} node types",
                    config.workflow_name,
                    config.node_types.as_ref().map_or(0, Vec::len)
                );
                IntentAnalysis::from_model(config)
            }
            Err(failure) => {
                warn!(
                    "Failed to parse intent analysis reply ({}), using default config - Reply: {}",
                    failure,
                    response.content()
                );
                IntentAnalysis::fallback(language, FallbackReason::Unparseable(failure))
            }
        }
    }
}

#[async_trait]
impl<P: LlmProvider + ?Sized> IntentAnalyzer for LlmIntentAnalyzer<P> {
    async fn analyze(&self, user_input: &str, language: Language) -> IntentConfig {
        self.analyze_detailed(user_input, language).await.config
    }
}
