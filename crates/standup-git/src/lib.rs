// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! standup-git: Git log extraction for daily-standup
//!
//! This library crate queries `git log` for a single calendar day, parses the
//! output into [`CommitRecord`]s and groups them per project into a
//! [`ProjectCommitSet`].

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use standup_git::{LogQuery, aggregate};
//!
//! let date = NaiveDate::from_ymd_opt(2026, 1, 17).expect("valid date");
//! let api = LogQuery::new(Some("/src/api".into()), date).run();
//! let web = LogQuery::new(Some("/src/web".into()), date).run();
//!
//! let projects = aggregate([("API".to_string(), api), ("Web".to_string(), web)]);
//! println!("{} commits today", projects.total_commits());
//! ```

pub mod aggregate;
pub mod commit;
pub mod error;
pub mod extractor;
pub mod parser;

pub use aggregate::{ProjectCommitSet, ProjectCommits, aggregate};
pub use commit::CommitRecord;
pub use error::GitError;
pub use extractor::LogQuery;
pub use parser::parse_log_output;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::aggregate::{ProjectCommitSet, aggregate};
    pub use crate::commit::CommitRecord;
    pub use crate::error::GitError;
    pub use crate::extractor::LogQuery;
}
