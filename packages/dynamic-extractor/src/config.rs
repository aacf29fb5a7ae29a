//! Runtime configuration loaded from the environment.
//!
//! API keys are read once and held as [`SecretString`] so they never leak
//! into logs or debug output.

use secrecy::{ExposeSecret, SecretBox};
use std::fmt;

use crate::error::{ExtractorError, Result};

pub const DEFAULT_GROQ_MODEL: &str = "llama3-8b-8192";
pub const DEFAULT_SHEET_RANGE: &str = "Sheet1";

/// A secret string that won't be logged or displayed.
pub struct SecretString(SecretBox<str>);

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretBox::new(Box::from(value.into().as_str())))
    }

    /// Expose the secret value. Only call this when building a request.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for SecretString {
    fn clone(&self) -> Self {
        Self::new(self.expose())
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Extractor configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub serpapi_key: Option<SecretString>,
    pub groq_api_key: Option<SecretString>,
    pub groq_model: String,
    /// Override for the OpenAI-compatible endpoint (defaults to Groq)
    pub groq_base_url: Option<String>,
    pub sheets_api_key: Option<SecretString>,
    /// Rows processed at once. 1 keeps the run strictly sequential.
    pub concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            serpapi_key: None,
            groq_api_key: None,
            groq_model: DEFAULT_GROQ_MODEL.to_string(),
            groq_base_url: None,
            sheets_api_key: None,
            concurrency: 1,
        }
    }
}

/// The two keys an extraction run cannot start without.
#[derive(Debug, Clone)]
pub struct ApiKeys {
    pub serpapi: SecretString,
    pub groq: SecretString,
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    ///
    /// Missing API keys are not an error here; they are checked by
    /// [`Config::require_api_keys`] when a run starts.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = |name: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .map(|v| SecretString::new(v.trim()))
        };

        let concurrency = match lookup("EXTRACTOR_CONCURRENCY") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                ExtractorError::Config(format!(
                    "EXTRACTOR_CONCURRENCY must be a positive number, got {:?}",
                    raw
                ))
            })?,
            None => 1,
        };
        if concurrency == 0 {
            return Err(ExtractorError::Config(
                "EXTRACTOR_CONCURRENCY must be at least 1".into(),
            ));
        }

        Ok(Self {
            serpapi_key: secret("SERPAPI_KEY"),
            groq_api_key: secret("GROQ_API_KEY"),
            groq_model: lookup("GROQ_MODEL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_GROQ_MODEL.to_string()),
            groq_base_url: lookup("GROQ_BASE_URL").filter(|v| !v.trim().is_empty()),
            sheets_api_key: secret("GOOGLE_SHEETS_API_KEY"),
            concurrency,
        })
    }

    /// Both search and model keys, or a configuration error naming what's missing.
    pub fn require_api_keys(&self) -> Result<ApiKeys> {
        match (&self.serpapi_key, &self.groq_api_key) {
            (Some(serpapi), Some(groq)) => Ok(ApiKeys {
                serpapi: serpapi.clone(),
                groq: groq.clone(),
            }),
            (serpapi, groq) => {
                let missing: Vec<&str> = [
                    serpapi.is_none().then_some("SERPAPI_KEY"),
                    groq.is_none().then_some("GROQ_API_KEY"),
                ]
                .into_iter()
                .flatten()
                .collect();
                Err(ExtractorError::Config(format!(
                    "Please provide both SerpAPI and Groq API keys (missing: {})",
                    missing.join(", ")
                )))
            }
        }
    }
}
