//! daily-standup: summarize a day's commits and mail the digest
//!
//! Reads repositories and credentials from an env file, collects the day's
//! commits, asks a local Ollama model for a summary, emails it and writes a
//! `commits_DD-MM-YY.txt` log.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use standup::config::{Cli, Settings, load_env_file};
use standup::notify::SmtpMailer;
use standup::pipeline::{Pipeline, PipelineError};
use standup_summary::OllamaClient;
use tracing::{error, info};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the commit listing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(cli.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            if e.downcast_ref::<PipelineError>().is_some() {
                match std::env::current_dir() {
                    Ok(dir) => eprintln!("Current directory: {}", dir.display()),
                    Err(_) => eprintln!("Current directory: <unavailable>"),
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let env_file = cli.env_file_path();
    let env = load_env_file(&env_file)?;
    let settings = Settings::from_env_map(&env)
        .with_context(|| format!("Invalid settings in {}", env_file.display()))?;

    let date = cli.run_date();
    info!(
        env_file = %env_file.display(),
        %date,
        model = %settings.ollama_model,
        "Loaded settings"
    );

    let client = OllamaClient::new(&settings.ollama_url, settings.ollama_model.as_str())
        .context("Failed to create Ollama client")?;
    let mailer = (!cli.no_email).then(|| SmtpMailer::new(settings.mail.clone()));

    let pipeline = Pipeline::new(settings, date, cli.output_dir_path(), client, mailer);
    let outcome = pipeline.run()?;

    println!("\nResults saved to: {}", outcome.log_file.display());
    Ok(())
}
