// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for standup-summary

use thiserror::Error;

/// Errors that can occur while generating a summary
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Request could not be sent or the body could not be read
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Server answered with a non-success status
    #[error("Ollama returned status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, trimmed
        body: String,
    },
}
