// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Per-project commit aggregation

use serde::{Deserialize, Serialize};

use crate::commit::CommitRecord;

/// Commits collected from one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCommits {
    /// Project display name
    pub name: String,
    /// Commits in the order git returned them
    pub commits: Vec<CommitRecord>,
}

impl ProjectCommits {
    /// Number of commits in this project
    #[must_use]
    pub fn count(&self) -> usize {
        self.commits.len()
    }
}

/// Ordered mapping from project name to its commits
///
/// Projects keep the order in which they were first inserted. A project with
/// no commits is still present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCommitSet {
    projects: Vec<ProjectCommits>,
}

impl ProjectCommitSet {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a project's commits
    ///
    /// Inserting a name that is already present appends to that project and
    /// keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, commits: Vec<CommitRecord>) {
        let name = name.into();
        match self.projects.iter_mut().find(|p| p.name == name) {
            Some(existing) => existing.commits.extend(commits),
            None => self.projects.push(ProjectCommits { name, commits }),
        }
    }

    /// Get a project's commits by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[CommitRecord]> {
        self.projects
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.commits.as_slice())
    }

    /// Iterate over projects in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &ProjectCommits> {
        self.projects.iter()
    }

    /// Project names in insertion order
    #[must_use]
    pub fn project_names(&self) -> Vec<&str> {
        self.projects.iter().map(|p| p.name.as_str()).collect()
    }

    /// Number of projects
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether no project has been inserted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Total number of commits across all projects
    #[must_use]
    pub fn total_commits(&self) -> usize {
        self.projects.iter().map(ProjectCommits::count).sum()
    }

    /// Whether any project has at least one commit
    #[must_use]
    pub fn has_commits(&self) -> bool {
        self.projects.iter().any(|p| !p.commits.is_empty())
    }
}

impl<'a> IntoIterator for &'a ProjectCommitSet {
    type Item = &'a ProjectCommits;
    type IntoIter = std::slice::Iter<'a, ProjectCommits>;

    fn into_iter(self) -> Self::IntoIter {
        self.projects.iter()
    }
}

/// Group per-repository extraction results by project name
///
/// Each record is tagged with its project. Order follows `results`; commits
/// are neither filtered, deduplicated nor re-sorted.
#[must_use]
pub fn aggregate<I>(results: I) -> ProjectCommitSet
where
    I: IntoIterator<Item = (String, Vec<CommitRecord>)>,
{
    let mut set = ProjectCommitSet::new();
    for (name, commits) in results {
        let commits = commits
            .into_iter()
            .map(|c| c.with_project(name.clone()))
            .collect();
        set.insert(name, commits);
    }
    set
}
