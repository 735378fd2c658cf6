// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Two-prompt summarization of a day's commits
//!
//! The standup synthesis and the per-project breakdown are requested with
//! separate calls, so one can fail while the other still succeeds.

use serde::{Deserialize, Serialize};
use standup_git::ProjectCommitSet;
use tracing::{error, info};

use crate::error::SummaryError;
use crate::ollama::TextGenerator;
use crate::prompt::{breakdown_prompt, project_blocks, standup_prompt};

/// Text used for both summaries when no project has commits
pub const NO_COMMITS_MESSAGE: &str = "No commits found for today.";

/// Generated summaries for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Commits across all projects
    pub total_commits: usize,
    /// Short standup-style synthesis
    pub synthesis: String,
    /// Per-project bullet breakdown
    pub breakdown: String,
}

impl RunSummary {
    /// Summary for a day without commits
    #[must_use]
    pub fn no_commits() -> Self {
        Self {
            total_commits: 0,
            synthesis: NO_COMMITS_MESSAGE.to_string(),
            breakdown: NO_COMMITS_MESSAGE.to_string(),
        }
    }
}

/// Produces a [`RunSummary`] using a [`TextGenerator`]
#[derive(Debug, Clone)]
pub struct Summarizer<G> {
    generator: G,
}

impl<G: TextGenerator> Summarizer<G> {
    /// Create a summarizer backed by `generator`
    #[must_use]
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Get a reference to the generator
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Summarize the day's commits
    ///
    /// Makes no generator call when there are no commits. Each failed call is
    /// logged and replaced by an `Error with Ollama: ...` string.
    pub fn summarize(&self, projects: &ProjectCommitSet) -> RunSummary {
        if !projects.has_commits() {
            info!("No commits to summarize");
            return RunSummary::no_commits();
        }

        let blocks = project_blocks(projects);

        info!(projects = blocks.len(), "Generating standup summary");
        let synthesis = self.complete("standup", &standup_prompt(&blocks));

        info!(projects = blocks.len(), "Generating project breakdown");
        let breakdown = self.complete("breakdown", &breakdown_prompt(&blocks));

        RunSummary {
            total_commits: projects.total_commits(),
            synthesis,
            breakdown,
        }
    }

    fn complete(&self, kind: &str, prompt: &str) -> String {
        self.generator.generate(prompt).unwrap_or_else(|e| {
            error!(kind, error = %e, "Summary generation failed");
            failure_message(&e)
        })
    }
}

/// Placeholder text substituted for a failed generation
#[must_use]
pub fn failure_message(error: &SummaryError) -> String {
    format!("Error with Ollama: {error}")
}
