//! Pure REST client for OpenAI-compatible chat completion APIs.
//!
//! Groq, OpenAI, and most hosted inference providers speak the same
//! `/chat/completions` wire format. This crate only knows that format; it
//! has no domain-specific logic.
//!
//! # Example
//!
//! ```rust,ignore
//! use chat_client::{ChatClient, ChatRequest, Message};
//!
//! let client = ChatClient::groq(api_key);
//!
//! let response = client.chat_completion(
//!     ChatRequest::new("llama3-8b-8192")
//!         .message(Message::system("You extract emails."))
//!         .message(Message::user("JSON search results: [...]")),
//! ).await?;
//!
//! println!("{}", response.content);
//! ```

pub mod error;
pub mod types;

pub use error::{ChatError, Result};
pub use types::*;

use reqwest::Client;
use tracing::{debug, warn};

/// Groq's OpenAI-compatible endpoint.
pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// OpenAI's endpoint.
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Chat completion client for any OpenAI-compatible provider.
#[derive(Clone)]
pub struct ChatClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl ChatClient {
    /// Create a client against an arbitrary OpenAI-compatible base URL.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Create a client for Groq.
    pub fn groq(api_key: impl Into<String>) -> Self {
        Self::new(api_key, GROQ_BASE_URL)
    }

    /// Create a Groq client from environment variable `GROQ_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GROQ_API_KEY")
            .map_err(|_| ChatError::Config("GROQ_API_KEY not set".into()))?;
        Ok(Self::groq(api_key))
    }

    /// Set a custom base URL (for proxies, self-hosted gateways, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Chat completion.
    ///
    /// Sends the messages and returns the first choice's content. A `null`
    /// content from the provider comes back as an empty string.
    pub async fn chat_completion(&self, request: ChatRequest) -> Result<ChatResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Chat completion request failed");
                ChatError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Chat completion API error");
            return Err(ChatError::Api(format!("{}: {}", status, error_text)));
        }

        let raw: types::ChatResponseRaw = response
            .json()
            .await
            .map_err(|e| ChatError::Parse(e.to_string()))?;

        let response = first_choice(raw, &request.model)?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            "Chat completion"
        );

        Ok(response)
    }

    /// Single-turn completion: one system message, one user message.
    pub async fn complete(
        &self,
        model: &str,
        system: impl Into<String>,
        user: impl Into<String>,
    ) -> Result<String> {
        let request = ChatRequest::new(model)
            .message(Message::system(system))
            .message(Message::user(user));

        Ok(self.chat_completion(request).await?.content)
    }
}

fn first_choice(raw: types::ChatResponseRaw, model: &str) -> Result<ChatResponse> {
    let content = raw
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content.unwrap_or_default())
        .ok_or_else(|| ChatError::NoChoices {
            model: model.to_string(),
        })?;

    Ok(ChatResponse {
        content,
        usage: raw.usage,
    })
}

impl std::fmt::Debug for ChatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatClient")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groq_defaults() {
        let client = ChatClient::groq("gsk-test");
        assert_eq!(client.api_key, "gsk-test");
        assert_eq!(client.base_url(), GROQ_BASE_URL);
    }

    #[test]
    fn test_custom_base_url() {
        let client = ChatClient::groq("gsk-test").with_base_url("http://localhost:8080/v1");
        assert_eq!(client.base_url(), "http://localhost:8080/v1");
    }

    #[test]
    fn test_debug_redacts_key() {
        let client = ChatClient::groq("gsk-super-secret");
        let debug = format!("{:?}", client);
        assert!(!debug.contains("gsk-super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_empty_choices_is_no_choices_error() {
        let raw: types::ChatResponseRaw =
            serde_json::from_str(r#"{"choices":[],"usage":null}"#).unwrap();
        let err = first_choice(raw, "llama3-8b-8192").unwrap_err();
        assert!(matches!(err, ChatError::NoChoices { ref model } if model == "llama3-8b-8192"));
        assert!(err.to_string().contains("llama3-8b-8192"));
    }

    #[test]
    fn test_null_content_becomes_empty_string() {
        let raw: types::ChatResponseRaw = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":null}}],"usage":null}"#,
        )
        .unwrap();
        assert_eq!(first_choice(raw, "m").unwrap().content, "");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let client = ChatClient::groq("gsk-test").with_base_url("http://127.0.0.1:9");
        let err = client
            .complete("llama3-8b-8192", "sys", "user")
            .await
            .unwrap_err();
        assert!(matches!(err, ChatError::Network(_)));
    }
}
