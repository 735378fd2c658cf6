// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! The daily run: fetch, aggregate, summarize, notify, persist
//!
//! Each stage runs once, in order. Only a failure to write the log file
//! ends the run with an error; git, summarizer and mail failures degrade to
//! empty results, error text or a `false` delivery flag.

use std::path::PathBuf;

use chrono::NaiveDate;
use standup_git::extractor::DEFAULT_GIT_PROGRAM;
use standup_git::{LogQuery, ProjectCommitSet, aggregate};
use standup_summary::{RunSummary, Summarizer, TextGenerator};
use tracing::{debug, info};

use crate::config::Settings;
use crate::notify::{Email, Mailer, notify};
use crate::persist::{PersistError, write_log};
use crate::report::{console_listing, email_body, email_subject, log_file_contents};

/// Result of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Commits per configured repository
    pub commits: ProjectCommitSet,
    /// Generated summaries
    pub summary: RunSummary,
    /// Whether the summary email was delivered
    pub email_sent: bool,
    /// Path of the written log file
    pub log_file: PathBuf,
}

/// Orchestrates one daily run
pub struct Pipeline<G, M> {
    settings: Settings,
    date: NaiveDate,
    output_dir: PathBuf,
    summarizer: Summarizer<G>,
    mailer: Option<M>,
    git_program: String,
}

impl<G: TextGenerator, M: Mailer> Pipeline<G, M> {
    /// Create a pipeline for `date`
    ///
    /// With `mailer` set to `None` the email stage is skipped.
    pub fn new(
        settings: Settings,
        date: NaiveDate,
        output_dir: PathBuf,
        generator: G,
        mailer: Option<M>,
    ) -> Self {
        Self {
            settings,
            date,
            output_dir,
            summarizer: Summarizer::new(generator),
            mailer,
            git_program: DEFAULT_GIT_PROGRAM.to_string(),
        }
    }

    /// Use a different git executable
    #[must_use]
    pub fn with_git_program(mut self, program: impl Into<String>) -> Self {
        self.git_program = program.into();
        self
    }

    /// Get the settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Get the run date
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Collect the day's commits from every repository, in configured order
    ///
    /// Each repository's commits are printed to stdout as they arrive.
    pub fn collect(&self) -> ProjectCommitSet {
        let results = self.settings.repositories.iter().map(|repo| {
            debug!(project = %repo.name, path = ?repo.path, "Fetching commits");
            let commits = LogQuery::new(repo.path.clone(), self.date)
                .with_program(self.git_program.as_str())
                .run();
            (repo.name.clone(), commits)
        });

        let projects = aggregate(results);
        for project in &projects {
            print!("{}", console_listing(project));
        }
        projects
    }

    /// Run every stage
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Persist`] if the log file cannot be written.
    pub fn run(&self) -> Result<RunOutcome, PipelineError> {
        info!(
            date = %self.date,
            repositories = self.settings.repositories.len(),
            "Starting daily standup run"
        );

        let commits = self.collect();
        println!("\nTotal commits: {}", commits.total_commits());

        let summary = self.summarizer.summarize(&commits);

        let email_sent = match &self.mailer {
            Some(mailer) => {
                let email = Email::new(
                    email_subject(self.date),
                    email_body(self.date, &commits, &summary),
                );
                notify(mailer, &email)
            }
            None => {
                info!("Email delivery disabled");
                false
            }
        };

        let contents = log_file_contents(self.date, &commits, &summary);
        let log_file = write_log(&self.output_dir, self.date, &contents)?;

        info!(
            total_commits = commits.total_commits(),
            email_sent,
            "Daily standup run complete"
        );

        Ok(RunOutcome {
            commits,
            summary,
            email_sent,
            log_file,
        })
    }
}

/// Errors that end a run
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The log file could not be written
    #[error(transparent)]
    Persist(#[from] PersistError),
}
