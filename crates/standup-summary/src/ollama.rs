// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Ollama generate API client
//!
//! Requests are sent to `POST <base>/api/generate` with streaming disabled, so
//! the whole completion arrives as a single JSON object whose `response` field
//! holds the generated text.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SummaryError;

/// Default Ollama server address
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
/// Default model identifier
pub const DEFAULT_MODEL: &str = "llama3.2:latest";
/// Text returned when the reply has no `response` field
pub const NO_RESPONSE: &str = "No response from Ollama";

/// Something that turns a prompt into generated text
pub trait TextGenerator {
    /// Generate a completion for `prompt`
    ///
    /// # Errors
    ///
    /// Returns `SummaryError` if the backend cannot produce a completion.
    fn generate(&self, prompt: &str) -> Result<String, SummaryError>;
}

impl<T: TextGenerator + ?Sized> TextGenerator for &T {
    fn generate(&self, prompt: &str) -> Result<String, SummaryError> {
        (**self).generate(prompt)
    }
}

/// Body of a generate request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateRequest<'a> {
    /// Model identifier, e.g. `llama3.2:latest`
    pub model: &'a str,
    /// Prompt text
    pub prompt: &'a str,
    /// Always false: the reply is delivered in one piece
    pub stream: bool,
}

/// Body of a non-streamed generate reply (other fields are ignored)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenerateResponse {
    /// Generated text
    #[serde(default)]
    pub response: Option<String>,
}

/// Blocking client for a local Ollama server
#[derive(Debug, Clone)]
pub struct OllamaClient {
    endpoint: String,
    model: String,
    http: reqwest::blocking::Client,
}

impl OllamaClient {
    /// Create a client for the server at `base_url` using `model`
    ///
    /// Requests have no timeout: generation on a local model can take minutes.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::Http` if the HTTP client cannot be built.
    pub fn new(base_url: &str, model: impl Into<String>) -> Result<Self, SummaryError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(None::<std::time::Duration>)
            .build()?;
        Ok(Self {
            endpoint: generate_endpoint(base_url),
            model: model.into(),
            http,
        })
    }

    /// Full URL of the generate endpoint
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Model used for requests
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl TextGenerator for OllamaClient {
    fn generate(&self, prompt: &str) -> Result<String, SummaryError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        debug!(
            endpoint = %self.endpoint,
            model = %self.model,
            prompt_len = prompt.len(),
            "Sending generate request"
        );

        let response = self.http.post(&self.endpoint).json(&request).send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(SummaryError::Status {
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }

        let reply: GenerateResponse = serde_json::from_str(&body)?;
        Ok(reply.response.unwrap_or_else(|| NO_RESPONSE.to_string()))
    }
}

/// Build `<base>/api/generate`, tolerating a trailing slash on `base_url`
fn generate_endpoint(base_url: &str) -> String {
    format!("{}/api/generate", base_url.trim_end_matches('/'))
}
