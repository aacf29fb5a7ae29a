//! Language-model trait and the Groq-backed implementation.

use async_trait::async_trait;
use chat_client::ChatClient;

use crate::config::SecretString;
use crate::error::Result;

/// A stateless single-turn model call.
#[async_trait]
pub trait ExtractionAgent: Send + Sync {
    /// Send `instruction` as the system message and `content` as the user
    /// message; return the model's text.
    async fn complete(&self, instruction: &str, content: &str) -> Result<String>;
}

/// Groq chat completions (OpenAI-compatible endpoint).
#[derive(Debug, Clone)]
pub struct GroqAgent {
    client: ChatClient,
    model: String,
}

impl GroqAgent {
    pub fn new(api_key: &SecretString, model: impl Into<String>) -> Self {
        Self {
            client: ChatClient::groq(api_key.expose()),
            model: model.into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.client = self.client.with_base_url(url);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ExtractionAgent for GroqAgent {
    async fn complete(&self, instruction: &str, content: &str) -> Result<String> {
        Ok(self.client.complete(&self.model, instruction, content).await?)
    }
}
