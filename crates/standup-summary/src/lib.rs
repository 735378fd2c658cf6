// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! standup-summary: Commit summarization for daily-standup
//!
//! This library crate turns a [`ProjectCommitSet`](standup_git::ProjectCommitSet)
//! into two prompts (a standup synthesis and a per-project breakdown) and sends
//! them to a local Ollama server.
//!
//! # Example
//!
//! ```no_run
//! use standup_git::aggregate;
//! use standup_summary::{OllamaClient, Summarizer};
//!
//! let projects = aggregate([("API".to_string(), Vec::new())]);
//! let client = OllamaClient::new("http://localhost:11434", "llama3.2:latest")
//!     .expect("build client");
//! let summary = Summarizer::new(client).summarize(&projects);
//! println!("{}", summary.synthesis);
//! ```

pub mod error;
pub mod ollama;
pub mod prompt;
pub mod summarizer;

pub use error::SummaryError;
pub use ollama::{GenerateRequest, GenerateResponse, OllamaClient, TextGenerator};
pub use summarizer::{NO_COMMITS_MESSAGE, RunSummary, Summarizer, failure_message};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::SummaryError;
    pub use crate::ollama::{OllamaClient, TextGenerator};
    pub use crate::summarizer::{RunSummary, Summarizer};
}
