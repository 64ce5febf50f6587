//! LLM provider implementations

mod factory;
mod http_client;
mod openai;

pub use factory::{ConfiguredProvider, LlmProviderFactory};
pub use http_client::{HttpClient, HttpClientTrait};
pub use openai::OpenAiProvider;
