// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Prompt construction from aggregated commits

use standup_git::ProjectCommitSet;

/// One text block per project that has commits
///
/// ```text
/// Project: Alpha
/// - feat: first change
/// - fix: second change
/// ```
///
/// Projects without commits are left out.
#[must_use]
pub fn project_blocks(projects: &ProjectCommitSet) -> Vec<String> {
    projects
        .iter()
        .filter(|p| !p.commits.is_empty())
        .map(|p| {
            let mut block = format!("Project: {}", p.name);
            for commit in &p.commits {
                block.push_str("\n- ");
                block.push_str(&commit.message);
            }
            block
        })
        .collect()
}

/// Prompt asking for a short standup-style synthesis
#[must_use]
pub fn standup_prompt(blocks: &[String]) -> String {
    format!(
        "Based on these git commit messages from today, grouped by project, \
         provide a concise summary of the work accomplished:\n\n\
         {}\n\n\
         Please provide a brief, professional summary suitable for a daily standup meeting.",
        blocks.join("\n\n")
    )
}

/// Prompt asking for a per-project bullet list
#[must_use]
pub fn breakdown_prompt(blocks: &[String]) -> String {
    format!(
        "Based on these git commit messages from today, grouped by project:\n\n\
         {}\n\n\
         For each project, write the project name on its own line followed by \
         one to three short bullet points (starting with \"- \") describing what \
         was done. Only include the listed projects and do not add any other text.",
        blocks.join("\n\n")
    )
}
