//! Configuration for daily-standup
//!
//! Settings come from two places: command-line flags (parsed with clap) and a
//! `KEY=VALUE` env file holding repositories, model and mail credentials.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use clap::Parser;
use standup_summary::ollama::{DEFAULT_MODEL, DEFAULT_OLLAMA_URL};
use tracing::warn;

/// Default env file, relative to the working directory
pub const DEFAULT_ENV_FILE: &str = ".env";
/// Default SMTP relay
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
/// Default SMTP submission port (STARTTLS)
pub const DEFAULT_SMTP_PORT: u16 = 587;
/// Project name used when no repository is configured and the working
/// directory has no usable name
pub const FALLBACK_PROJECT_NAME: &str = "workspace";

/// Raw key/value pairs read from an env file
pub type EnvMap = BTreeMap<String, String>;

/// Daily Standup - summarize today's commits and mail the digest
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "daily-standup")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the settings file (KEY=VALUE lines)
    ///
    /// Defaults to `.env` in the current directory.
    #[arg(short, long, env = "STANDUP_ENV_FILE")]
    pub env_file: Option<PathBuf>,

    /// Day to report on, as YYYY-MM-DD
    ///
    /// Defaults to today (local time).
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Directory the commit log file is written to
    ///
    /// Defaults to the current directory.
    #[arg(short, long, env = "STANDUP_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Do not send the summary email
    #[arg(long, default_value = "false")]
    pub no_email: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - only errors and warnings are logged
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Cli {
    /// Get the env file path, using `.env` if not specified
    #[must_use]
    pub fn env_file_path(&self) -> PathBuf {
        self.env_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE))
    }

    /// Get the report date, using today if not specified
    #[must_use]
    pub fn run_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Get the output directory, using the current directory if not specified
    #[must_use]
    pub fn output_dir_path(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Read an env file into a key/value map
///
/// Each line is trimmed; blank lines and lines starting with `#` are skipped
/// and the rest are split on their first `=`. Values are kept verbatim, so
/// spaces, `$` and `#` inside a value survive. Lines without `=` are skipped
/// with a warning. The process environment is left untouched and keys are
/// not validated here.
///
/// # Errors
///
/// Returns `ConfigError::EnvFileNotFound` if `path` is not a file and
/// `ConfigError::EnvFile` if it cannot be read.
pub fn load_env_file(path: &Path) -> Result<EnvMap, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::EnvFileNotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::EnvFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_env(&contents))
}

/// Parse `KEY=VALUE` lines, splitting on the first `=`
#[must_use]
pub fn parse_env(contents: &str) -> EnvMap {
    let mut map = EnvMap::new();
    for (number, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match line.split_once('=') {
            Some((key, value)) => {
                map.insert(key.to_string(), value.to_string());
            }
            None => warn!(line = number + 1, "Skipping env file line without '='"),
        }
    }
    map
}

/// A repository to collect commits from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// Display name used in reports
    pub name: String,
    /// Repository path (None = current working directory)
    pub path: Option<PathBuf>,
}

/// SMTP delivery settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailSettings {
    /// Sender address, also the SMTP username (`SENDER_EMAIL`)
    pub sender: Option<String>,
    /// SMTP password (`SENDER_PASSWORD`)
    pub password: Option<String>,
    /// Recipient address (`SLACK_EMAIL`)
    pub recipient: Option<String>,
    /// Relay host (`SMTP_HOST`)
    pub host: String,
    /// Relay port (`SMTP_PORT`)
    pub port: u16,
}

impl Default for MailSettings {
    fn default() -> Self {
        Self {
            sender: None,
            password: None,
            recipient: None,
            host: DEFAULT_SMTP_HOST.to_string(),
            port: DEFAULT_SMTP_PORT,
        }
    }
}

/// Typed settings derived from the env file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Repositories in configured order
    pub repositories: Vec<Repository>,
    /// Ollama model identifier (`OLLAMA_MODEL`)
    pub ollama_model: String,
    /// Ollama server address (`OLLAMA_URL`)
    pub ollama_url: String,
    /// Mail delivery settings
    pub mail: MailSettings,
}

impl Settings {
    /// Build settings from raw env file values
    ///
    /// `REPO_PATHS` (comma-separated) takes precedence over `REPO_PATH`. With
    /// neither set, the current directory is used. `REPO_NAMES` must list one
    /// name per path; without it names are taken from the paths.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::RepositoryCountMismatch` if `REPO_NAMES` and the
    /// repository paths differ in length, and `ConfigError::InvalidValue` for
    /// an unparseable `SMTP_PORT`.
    pub fn from_env_map(env: &EnvMap) -> Result<Self, ConfigError> {
        let repositories = repositories(env)?;

        let port = match value(env, "SMTP_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "SMTP_PORT".to_string(),
                value: raw.to_string(),
            })?,
            None => DEFAULT_SMTP_PORT,
        };

        Ok(Self {
            repositories,
            ollama_model: value(env, "OLLAMA_MODEL").unwrap_or(DEFAULT_MODEL).to_string(),
            ollama_url: value(env, "OLLAMA_URL").unwrap_or(DEFAULT_OLLAMA_URL).to_string(),
            mail: MailSettings {
                sender: raw_value(env, "SENDER_EMAIL"),
                password: raw_value(env, "SENDER_PASSWORD"),
                recipient: raw_value(env, "SLACK_EMAIL"),
                host: value(env, "SMTP_HOST").unwrap_or(DEFAULT_SMTP_HOST).to_string(),
                port,
            },
        })
    }
}

/// Look up a plain setting, trimmed, treating blank values as missing
fn value<'a>(env: &'a EnvMap, key: &str) -> Option<&'a str> {
    env.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// Look up a credential exactly as written; only an empty value is missing
fn raw_value(env: &EnvMap, key: &str) -> Option<String> {
    env.get(key).filter(|v| !v.is_empty()).cloned()
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn repositories(env: &EnvMap) -> Result<Vec<Repository>, ConfigError> {
    let configured = value(env, "REPO_PATHS").or_else(|| value(env, "REPO_PATH"));
    let paths: Vec<Option<PathBuf>> = configured
        .map(split_list)
        .unwrap_or_default()
        .into_iter()
        .map(|p| Some(PathBuf::from(p)))
        .collect();
    let paths = if paths.is_empty() { vec![None] } else { paths };

    let names = match value(env, "REPO_NAMES") {
        Some(raw) => {
            let names = split_list(raw);
            if names.len() != paths.len() {
                return Err(ConfigError::RepositoryCountMismatch {
                    paths: paths.len(),
                    names: names.len(),
                });
            }
            names
        }
        None => paths.iter().map(|p| default_name(p.as_deref())).collect(),
    };

    Ok(names
        .into_iter()
        .zip(paths)
        .map(|(name, path)| Repository { name, path })
        .collect())
}

/// Name a repository after the last component of its path
fn default_name(path: Option<&Path>) -> String {
    let dir = match path {
        Some(p) => Some(p.to_path_buf()),
        None => std::env::current_dir().ok(),
    };
    dir.as_deref()
        .and_then(Path::file_name)
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_PROJECT_NAME.to_string())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Env file does not exist
    #[error("{} file not found. Please create it with required variables.", .0.display())]
    EnvFileNotFound(PathBuf),

    /// Env file exists but could not be read
    #[error("Failed to read env file {}: {source}", .path.display())]
    EnvFile {
        /// Path of the env file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// REPO_NAMES and the repository paths differ in length
    #[error("REPO_PATHS lists {paths} repositories but REPO_NAMES lists {names} names")]
    RepositoryCountMismatch {
        /// Number of repository paths
        paths: usize,
        /// Number of names
        names: usize,
    },

    /// A setting has an unusable value
    #[error("Invalid value for {key}: {value}")]
    InvalidValue {
        /// Setting name
        key: String,
        /// Rejected value
        value: String,
    },
}
