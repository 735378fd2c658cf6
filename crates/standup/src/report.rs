// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Plain-text renderings of a day's commits and summaries
//!
//! The same data is rendered three ways: a console listing while commits are
//! collected, the email body, and the log file.

use chrono::NaiveDate;
use standup_git::{CommitRecord, ProjectCommitSet, ProjectCommits};
use standup_summary::RunSummary;

/// Footer appended to the email body
pub const EMAIL_FOOTER: &str = "Generated automatically by daily standup script";
/// Line shown for a project without commits
pub const NO_PROJECT_COMMITS: &str = "No commits found.";

const HEADER_RULE_WIDTH: usize = 50;
const COMMIT_RULE_WIDTH: usize = 40;
const CONSOLE_RULE_WIDTH: usize = 80;

/// `1 commit`, `3 commits`
#[must_use]
pub fn commit_count(n: usize) -> String {
    if n == 1 {
        "1 commit".to_string()
    } else {
        format!("{n} commits")
    }
}

fn commit_lines(commit: &CommitRecord) -> String {
    format!(
        "Hash: {}\nAuthor: {}\nDate: {}\nMessage: {}\n",
        commit.hash, commit.author, commit.date, commit.message
    )
}

/// Console listing for one project, printed as it is collected
#[must_use]
pub fn console_listing(project: &ProjectCommits) -> String {
    if project.commits.is_empty() {
        return format!("\n[{}] {NO_PROJECT_COMMITS}\n", project.name);
    }

    let rule = "-".repeat(CONSOLE_RULE_WIDTH);
    let mut out = format!(
        "\n[{}] Found {}:\n{rule}\n",
        project.name,
        commit_count(project.count())
    );
    for commit in &project.commits {
        out.push_str(&commit_lines(commit));
        out.push_str(&format!("{rule}\n"));
    }
    out
}

/// Email subject, e.g. `Daily Work Summary - 17/01/2026`
#[must_use]
pub fn email_subject(date: NaiveDate) -> String {
    format!("Daily Work Summary - {}", date.format("%d/%m/%Y"))
}

/// Email body: totals, per-project counts, then both summaries
#[must_use]
pub fn email_body(date: NaiveDate, projects: &ProjectCommitSet, summary: &RunSummary) -> String {
    let counts: String = projects
        .iter()
        .map(|p| format!("  • {}: {}\n", p.name, commit_count(p.count())))
        .collect();

    format!(
        "Daily Work Summary for {}\n\n\
         📊 Total Commits: {}\n\n\
         📁 Commits by Project:\n{counts}\n\
         📋 Work Summary:\n{}\n\n\
         🗂️ Project Breakdown:\n{}\n\n\
         ---\n{EMAIL_FOOTER}\n",
        date.format("%d/%m/%Y"),
        projects.total_commits(),
        summary.synthesis,
        summary.breakdown,
    )
}

/// Log file contents: every project's commits, the total and both summaries
#[must_use]
pub fn log_file_contents(
    date: NaiveDate,
    projects: &ProjectCommitSet,
    summary: &RunSummary,
) -> String {
    let mut out = format!(
        "Commits for {}\n{}\n",
        date.format("%Y-%m-%d"),
        "=".repeat(HEADER_RULE_WIDTH)
    );

    let rule = "-".repeat(COMMIT_RULE_WIDTH);
    for project in projects {
        out.push_str(&format!(
            "\nProject: {} ({})\n",
            project.name,
            commit_count(project.count())
        ));
        if project.commits.is_empty() {
            out.push_str(&format!("{NO_PROJECT_COMMITS}\n"));
        }
        for commit in &project.commits {
            out.push_str(&commit_lines(commit));
            out.push_str(&format!("{rule}\n"));
        }
    }

    out.push_str(&format!(
        "\nTotal commits: {}\n\n\
         📋 AI Summary:\n{}\n\n\
         🗂️ Project Breakdown:\n{}\n",
        projects.total_commits(),
        summary.synthesis,
        summary.breakdown,
    ));
    out
}
