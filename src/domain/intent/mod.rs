//! Intent analysis domain
//!
//! Free-form requests are resolved into an [`IntentConfig`], the same shape
//! callers use for explicit parameters, so both input paths converge before
//! graph assembly.

mod analyzer;
mod config;
mod extract;

pub use analyzer::{
    FallbackIntentAnalyzer, FallbackReason, IntentAnalysis, IntentAnalyzer, IntentSource,
};
pub use config::IntentConfig;
pub use extract::{extract_json_object, parse_intent_config, ParseFailure};

#[cfg(test)]
pub use analyzer::MockIntentAnalyzer;
