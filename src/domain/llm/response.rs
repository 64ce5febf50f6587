use serde::{Deserialize, Serialize};

use super::Message;

/// Response from an LLM provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmResponse {
    pub id: String,
    pub model: String,
    pub message: Message,
}

impl LlmResponse {
    pub fn new(id: String, model: String, message: Message) -> Self {
        Self { id, model, message }
    }

    pub fn content(&self) -> &str {
        self.message.content_text()
    }
}
