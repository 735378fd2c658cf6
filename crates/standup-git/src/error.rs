// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for standup-git

use std::process::ExitStatus;

use thiserror::Error;

/// Errors that can occur while querying a repository's history
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository path does not exist or is not a directory
    #[error("Repository not found: {path}")]
    RepositoryNotFound {
        /// The path that was given as a repository
        path: String,
    },

    /// The git executable could not be found on PATH
    #[error("{program} not found. Please ensure Git is installed and in PATH.")]
    ToolNotFound {
        /// The program that was invoked
        program: String,
    },

    /// The git process could not be started
    #[error("Failed to run {program}: {source}")]
    Spawn {
        /// The program that was invoked
        program: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// git ran but exited unsuccessfully
    #[error("git log exited with {status}: {stderr}")]
    CommandFailed {
        /// Exit status of the git process
        status: ExitStatus,
        /// Captured standard error, trimmed
        stderr: String,
    },
}
