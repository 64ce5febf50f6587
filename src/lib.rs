//! Dify DSL Generator
//!
//! Builds Dify workflow DSL documents from either:
//! - a free-form request, resolved into parameters by an LLM intent analyzer
//! - explicit parameters (name, description, node kinds, input variables)
//!
//! Output is a linear node graph plus a localized feature block, in English
//! or Japanese.

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use domain::{FallbackIntentAnalyzer, IntentAnalyzer};
use infrastructure::intent::LlmIntentAnalyzer;
use infrastructure::llm::LlmProviderFactory;
use infrastructure::services::DslGeneratorService;
use tracing::{info, warn};

/// Wire the generator service described by `config`.
///
/// Without an API key the service runs offline and every free-form request
/// resolves to the default workflow.
pub fn create_generator_service(config: &AppConfig) -> anyhow::Result<DslGeneratorService> {
    let analyzer: Arc<dyn IntentAnalyzer> = match LlmProviderFactory::from_settings(&config.llm)? {
        Some(configured) => {
            info!(
                "Intent analysis enabled via {} ({})",
                configured.provider.provider_name(),
                configured.model
            );
            Arc::new(LlmIntentAnalyzer::new(configured.provider, configured.model))
        }
        None => {
            warn!("No LLM API key configured, intent analysis will use the default workflow");
            Arc::new(FallbackIntentAnalyzer)
        }
    };

    Ok(DslGeneratorService::new(analyzer)
        .with_default_language(config.generator.default_language))
}
