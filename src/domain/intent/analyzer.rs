//! Intent analyzer trait

use async_trait::async_trait;

use super::{IntentConfig, ParseFailure};
use crate::domain::workflow::Language;

#[cfg(test)]
use mockall::automock;

/// Turns a natural-language request into workflow parameters.
///
/// Implementations never fail: any problem degrades to
/// [`IntentConfig::default_for`] the requested language.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait IntentAnalyzer: Send + Sync {
    async fn analyze(&self, user_input: &str, language: Language) -> IntentConfig;
}

/// Where an analyzed config came from
#[derive(Debug, Clone, PartialEq)]
pub enum IntentSource {
    /// Parsed from the model reply
    Model,
    /// Replaced by the default config
    Fallback(FallbackReason),
}

/// Why the default config was used
#[derive(Debug, Clone, PartialEq)]
pub enum FallbackReason {
    /// The model call itself failed (transport, HTTP status, timeout)
    Transport(String),
    /// The reply could not be parsed
    Unparseable(ParseFailure),
    /// No model is configured
    Offline,
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "model call failed: {}", e),
            Self::Unparseable(failure) => write!(f, "unusable reply: {}", failure),
            Self::Offline => write!(f, "no model configured"),
        }
    }
}

/// Analyzer output together with its provenance
#[derive(Debug, Clone, PartialEq)]
pub struct IntentAnalysis {
    pub config: IntentConfig,
    pub source: IntentSource,
}

impl IntentAnalysis {
    pub fn from_model(config: IntentConfig) -> Self {
        Self {
            config,
            source: IntentSource::Model,
        }
    }

    pub fn fallback(language: Language, reason: FallbackReason) -> Self {
        Self {
            config: IntentConfig::default_for(language),
            source: IntentSource::Fallback(reason),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, IntentSource::Fallback(_))
    }
}

/// Analyzer used when no model is available; always answers with the
/// default config
#[derive(Debug, Clone, Default)]
pub struct FallbackIntentAnalyzer;

#[async_trait]
impl IntentAnalyzer for FallbackIntentAnalyzer {
    async fn analyze(&self, _user_input: &str, language: Language) -> IntentConfig {
        IntentAnalysis::fallback(language, FallbackReason::Offline).config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fallback_analyzer_returns_default() {
        let analyzer = FallbackIntentAnalyzer;

        let en = analyzer.analyze("build me a translator", Language::En).await;
        let ja = analyzer.analyze("", Language::Ja).await;

        assert_eq!(en, IntentConfig::default_for(Language::En));
        assert_eq!(ja, IntentConfig::default_for(Language::Ja));
    }

    #[test]
    fn test_analysis_provenance() {
        let analysis = IntentAnalysis::fallback(
            Language::En,
            FallbackReason::Unparseable(ParseFailure::NoJsonObject),
        );
        assert!(analysis.is_fallback());
        assert_eq!(
            analysis.source,
            IntentSource::Fallback(FallbackReason::Unparseable(ParseFailure::NoJsonObject))
        );

        let analysis = IntentAnalysis::from_model(IntentConfig::default());
        assert!(!analysis.is_fallback());
    }

    #[test]
    fn test_fallback_reason_display() {
        let reason = FallbackReason::Transport("HTTP 503".to_string());
        assert_eq!(reason.to_string(), "model call failed: HTTP 503");

        let reason = FallbackReason::Unparseable(ParseFailure::EmptyReply);
        assert_eq!(reason.to_string(), "unusable reply: empty reply");
    }
}
