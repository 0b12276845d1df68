//! Core types for git-bumper

use serde::{Deserialize, Serialize};

/// A commit in the candidate range, annotated with tracker state
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Commit {
    /// Full commit hash (hex)
    pub hash: String,
    /// Commit subject line
    pub subject: String,
    /// Linked story ID (0 when the message carries no story reference)
    pub story_id: u64,
    /// Story display name (empty until annotated, or when there is no story)
    pub story_name: String,
    /// Whether the linked story is accepted (stories with ID 0 always are)
    pub accepted: bool,
}

impl Commit {
    /// First 8 characters of the hash, or the whole hash when shorter.
    pub fn short_sha(&self) -> &str {
        self.hash.get(..8).unwrap_or(&self.hash)
    }

    /// Pad or truncate the subject to exactly `width` characters.
    ///
    /// Subjects longer than `width` are cut and suffixed with `...`.
    pub fn format_subject(&self, width: usize) -> String {
        let len = self.subject.chars().count();
        if len <= width {
            format!("{}{}", self.subject, " ".repeat(width - len))
        } else {
            let truncated: String = self
                .subject
                .chars()
                .take(width.saturating_sub(3))
                .collect();
            format!("{truncated}...")
        }
    }
}
