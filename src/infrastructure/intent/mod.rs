//! Intent analyzer implementations

mod llm_analyzer;
mod prompts;

pub use llm_analyzer::{LlmIntentAnalyzer, ANALYSIS_TEMPERATURE};
pub use prompts::{system_prompt, user_prompt};
