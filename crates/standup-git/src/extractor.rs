// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Commit extraction via the `git` command line
//!
//! A [`LogQuery`] runs `git log` restricted to one calendar day inside a
//! repository and parses the result with [`parse_log_output`].

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::{Local, NaiveDate};
use tracing::{debug, error, info};

use crate::commit::CommitRecord;
use crate::error::GitError;
use crate::parser::{LOG_FORMAT, parse_log_output};

/// Default git executable
pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// A `git log` query for the commits of a single day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQuery {
    /// Repository to query (None = current working directory)
    pub repo: Option<PathBuf>,
    /// Day whose commits are collected
    pub date: NaiveDate,
    /// git executable to invoke
    pub program: String,
}

impl LogQuery {
    /// Create a query for `date` in `repo`
    #[must_use]
    pub fn new(repo: Option<PathBuf>, date: NaiveDate) -> Self {
        Self {
            repo,
            date,
            program: DEFAULT_GIT_PROGRAM.to_string(),
        }
    }

    /// Create a query for today's commits (local time)
    #[must_use]
    pub fn today(repo: Option<PathBuf>) -> Self {
        Self::new(repo, Local::now().date_naive())
    }

    /// Use a different git executable
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Arguments passed to git, covering `[date 00:00:00, date 23:59:59]`
    #[must_use]
    pub fn args(&self) -> Vec<String> {
        let day = self.date.format("%Y-%m-%d");
        vec![
            "log".to_string(),
            "--since".to_string(),
            format!("{day} 00:00:00"),
            "--until".to_string(),
            format!("{day} 23:59:59"),
            format!("--pretty=format:{LOG_FORMAT}"),
            "--date=short".to_string(),
        ]
    }

    /// Run the query, propagating failures
    ///
    /// The repository directory is applied to the child process only, so the
    /// caller's working directory is the same before and after, on success or
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if the repository path is not a
    /// directory, `GitError::ToolNotFound` if git is not on PATH, and
    /// `GitError::CommandFailed` if git exits unsuccessfully.
    pub fn try_run(&self) -> Result<Vec<CommitRecord>, GitError> {
        let mut command = Command::new(&self.program);
        command.args(self.args());

        if let Some(repo) = self.repo.as_deref() {
            ensure_directory(repo)?;
            command.current_dir(repo);
        }

        debug!(program = %self.program, repo = ?self.repo, date = %self.date, "Running git log");

        let output = command.output().map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                GitError::ToolNotFound {
                    program: self.program.clone(),
                }
            } else {
                GitError::Spawn {
                    program: self.program.clone(),
                    source,
                }
            }
        })?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let commits = parse_log_output(&stdout);
        if commits.is_empty() {
            info!(date = %self.date, repo = ?self.repo, "No commits found");
        } else {
            debug!(count = commits.len(), "Parsed commits");
        }
        Ok(commits)
    }

    /// Run the query, logging any failure and returning no commits instead
    #[must_use]
    pub fn run(&self) -> Vec<CommitRecord> {
        self.try_run().unwrap_or_else(|e| {
            error!(repo = ?self.repo, error = %e, "Error running git command");
            Vec::new()
        })
    }
}

fn ensure_directory(path: &Path) -> Result<(), GitError> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(GitError::RepositoryNotFound {
            path: path.display().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 17).expect("valid date")
    }

    #[test]
    fn test_args_cover_whole_day() {
        let query = LogQuery::new(None, date());
        let args = query.args();
        assert_eq!(args[0], "log");
        let window: Vec<&str> = args[1..5].iter().map(String::as_str).collect();
        assert_eq!(
            window,
            vec!["--since", "2026-01-17 00:00:00", "--until", "2026-01-17 23:59:59"]
        );
        assert!(args.contains(&"--date=short".to_string()));
        assert!(args.contains(&format!("--pretty=format:{LOG_FORMAT}")));
    }

    #[test]
    fn test_default_program_is_git() {
        assert_eq!(LogQuery::new(None, date()).program, "git");
    }

    #[test]
    fn test_with_program() {
        let query = LogQuery::new(None, date()).with_program("/usr/local/bin/git");
        assert_eq!(query.program, "/usr/local/bin/git");
    }

    #[test]
    fn test_today_uses_local_date() {
        let query = LogQuery::today(None);
        assert_eq!(query.date, Local::now().date_naive());
    }

    #[test]
    fn test_missing_repository() {
        let query = LogQuery::new(Some(PathBuf::from("/nonexistent/path/12345")), date());
        match query.try_run() {
            Err(GitError::RepositoryNotFound { path }) => assert!(path.contains("nonexistent")),
            other => panic!("Expected RepositoryNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_repository_run_is_empty() {
        let query = LogQuery::new(Some(PathBuf::from("/nonexistent/path/12345")), date());
        assert!(query.run().is_empty());
    }

    #[test]
    fn test_tool_not_found() {
        let query = LogQuery::new(None, date()).with_program("definitely-not-git-12345");
        assert!(matches!(query.try_run(), Err(GitError::ToolNotFound { .. })));
        assert!(query.run().is_empty());
    }

    #[test]
    fn test_working_directory_unchanged_after_failure() {
        let before = std::env::current_dir().expect("cwd");
        let query = LogQuery::new(Some(std::env::temp_dir()), date())
            .with_program("definitely-not-git-12345");
        let _ = query.run();
        assert_eq!(std::env::current_dir().expect("cwd"), before);
    }
}
