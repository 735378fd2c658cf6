//! Commit record type

use serde::{Deserialize, Serialize};

/// Number of characters kept from a full commit hash
pub const SHORT_HASH_LEN: usize = 8;

/// A single commit parsed from `git log` output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Short commit hash (first 8 characters)
    pub hash: String,
    /// Author display name
    pub author: String,
    /// Commit date as `YYYY-MM-DD`
    pub date: String,
    /// Full commit message, trimmed
    pub message: String,
    /// Project this commit belongs to, assigned during aggregation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
}

impl CommitRecord {
    /// Create a record, truncating `hash` to [`SHORT_HASH_LEN`] characters
    #[must_use]
    pub fn new(
        hash: &str,
        author: impl Into<String>,
        date: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            hash: short_hash(hash).to_string(),
            author: author.into(),
            date: date.into(),
            message: message.into(),
            project: None,
        }
    }

    /// Tag the record with the project it was collected from
    #[must_use]
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Get the first line of the commit message (subject)
    #[must_use]
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}

/// Truncate a hash to [`SHORT_HASH_LEN`] characters
#[must_use]
pub fn short_hash(hash: &str) -> &str {
    match hash.char_indices().nth(SHORT_HASH_LEN) {
        Some((idx, _)) => &hash[..idx],
        None => hash,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn sample_commit() -> CommitRecord {
        CommitRecord::new(
            "1945ab9c752534e733c38ba0109dc3b741f0a6eb",
            "Test Author",
            "2026-01-17",
            "feat(report): add per-project totals\n\nDetailed description here.",
        )
    }

    #[test]
    fn test_new_truncates_hash() {
        let commit = sample_commit();
        assert_eq!(commit.hash, "1945ab9c");
    }

    #[test]
    fn test_short_hash_handles_short_input() {
        assert_eq!(short_hash("abc"), "abc");
        assert_eq!(short_hash(""), "");
    }

    #[test]
    fn test_short_hash_exact_length() {
        assert_eq!(short_hash("12345678"), "12345678");
    }

    #[test]
    fn test_new_has_no_project() {
        assert!(sample_commit().project.is_none());
    }

    #[test]
    fn test_with_project() {
        let commit = sample_commit().with_project("Alpha");
        assert_eq!(commit.project.as_deref(), Some("Alpha"));
    }

    #[test]
    fn test_subject_multiline() {
        let commit = sample_commit();
        assert_eq!(commit.subject(), "feat(report): add per-project totals");
    }

    #[test]
    fn test_subject_empty_message() {
        let mut commit = sample_commit();
        commit.message = String::new();
        assert_eq!(commit.subject(), "");
    }

    #[test]
    fn test_json_omits_missing_project() {
        let json = serde_json::to_string(&sample_commit()).expect("serialize");
        assert!(json.contains("\"hash\":\"1945ab9c\""));
        assert!(!json.contains("project"));
    }

    #[test]
    fn test_json_roundtrip_with_project() {
        let commit = sample_commit().with_project("Beta");
        let json = serde_json::to_string(&commit).expect("serialize");
        let back: CommitRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(commit, back);
    }
}
