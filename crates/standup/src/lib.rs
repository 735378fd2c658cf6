//! standup library
//!
//! This module exports the configuration, report formatting, delivery and
//! pipeline stages of daily-standup for use by the binary and integration
//! tests.

pub mod config;
pub mod notify;
pub mod persist;
pub mod pipeline;
pub mod report;

pub use config::{Cli, ConfigError, Settings};
pub use notify::{Email, MailError, Mailer, SmtpMailer};
pub use persist::PersistError;
pub use pipeline::{Pipeline, PipelineError, RunOutcome};
