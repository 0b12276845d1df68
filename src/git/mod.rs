//! Git history access
//!
//! Resolves a commit range into story-annotated commit records by shelling
//! out to `git`.

mod client;
mod runner;

pub use client::GitClient;
pub use runner::{CommandRunner, GitCommandRunner};

use crate::error::Result;
use crate::types::Commit;
use async_trait::async_trait;

/// History service trait for commit-range queries
///
/// Abstracts git access so bump selection can be driven by test doubles.
#[async_trait]
pub trait History: Send + Sync {
    /// List the commits in a range, newest first, with story IDs extracted
    async fn commits(&self, commit_range: &str) -> Result<Vec<Commit>>;
}
