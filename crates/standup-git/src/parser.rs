// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! `git log` output parsing
//!
//! Commits are requested with a custom `--pretty` format in which every
//! record is framed by ASCII control characters:
//!
//! ```text
//! <RS>hash|author|date
//! <GS>message...
//! <FS>
//! ```
//!
//! Control characters cannot be typed into a commit message by accident, so
//! the framing survives messages containing `|`, newlines or marker-like text.

use tracing::warn;

use crate::commit::CommitRecord;

/// Marks the start of a commit record (ASCII record separator)
pub const RECORD_START: char = '\u{1e}';
/// Marks the start of the commit message (ASCII group separator)
pub const MESSAGE_START: char = '\u{1d}';
/// Marks the end of a commit record (ASCII file separator)
pub const RECORD_END: char = '\u{1c}';
/// Separator between header fields
pub const FIELD_SEPARATOR: char = '|';

/// `--pretty` format producing the framing understood by [`parse_log_output`]
pub const LOG_FORMAT: &str = "%x1e%H|%an|%ad%n%x1d%B%n%x1c";

/// Parse raw `git log` output into commit records
///
/// Blocks whose header cannot be split into hash, author and date are skipped
/// with a warning. Empty output yields an empty vector.
#[must_use]
pub fn parse_log_output(raw: &str) -> Vec<CommitRecord> {
    raw.split(RECORD_START)
        .filter(|block| !block.trim().is_empty())
        .filter_map(|block| {
            let parsed = parse_block(block);
            if parsed.is_none() {
                warn!(block = %preview(block), "Skipping malformed git log record");
            }
            parsed
        })
        .collect()
}

/// Parse a single record (text following a [`RECORD_START`])
fn parse_block(block: &str) -> Option<CommitRecord> {
    let (head, body) = block.split_once(MESSAGE_START)?;
    let header = head.trim().lines().next()?;
    let (hash, author, date) = split_header(header)?;

    let message = body.split(RECORD_END).next().unwrap_or("").trim();

    Some(CommitRecord::new(hash, author, date, message))
}

/// Split `hash|author|date` on exactly two separators
///
/// The hash ends at the first separator and the date starts after the last,
/// so an author name containing `|` stays intact.
fn split_header(header: &str) -> Option<(&str, &str, &str)> {
    let (hash, rest) = header.split_once(FIELD_SEPARATOR)?;
    let (author, date) = rest.rsplit_once(FIELD_SEPARATOR)?;

    let hash = hash.trim();
    if hash.is_empty() {
        return None;
    }
    Some((hash, author.trim(), date.trim()))
}

fn preview(block: &str) -> String {
    block.chars().take(60).filter(|c| !c.is_control()).collect()
}
