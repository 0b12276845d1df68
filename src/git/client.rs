//! Git-backed history provider
//!
//! Builds one [`Commit`] per hash in the range, extracting the `[#<id>]`
//! story reference from the full `git show` output. Commits that only bump
//! a tracked submodule carry no story reference of their own, so the client
//! follows the embedded subproject pointer one hop into the submodule and
//! extracts the story ID from that commit's message instead.

use crate::error::Result;
use crate::git::{CommandRunner, History};
use crate::types::Commit;
use async_trait::async_trait;
use regex::Regex;
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// `[#12345678]` style story reference, anywhere in the message
fn story_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\[#(\d+)\]").expect("hardcoded story pattern is valid"))
}

/// `+Subproject commit <sha>` line from a submodule pointer diff
fn subproject_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\+Subproject commit ([0-9a-fA-F]+)\b")
            .expect("hardcoded subproject pattern is valid")
    })
}

/// History provider that shells out to `git`
pub struct GitClient {
    runner: Arc<dyn CommandRunner>,
    follow_paths: Vec<String>,
}

impl GitClient {
    /// Create a client over the given runner
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            runner,
            follow_paths: Vec::new(),
        }
    }

    /// Follow submodule bump commits into these paths when extracting story IDs
    #[must_use]
    pub fn with_follow_paths(mut self, paths: Vec<String>) -> Self {
        self.follow_paths = paths;
        self
    }

    async fn build_commit(&self, sha: &str) -> Result<Commit> {
        let subject = self
            .runner
            .run(&["show", "--no-patch", "--pretty=format:%s", sha])
            .await?;

        // %B without --no-patch keeps the diff, which is where the
        // `+Subproject commit` line of a submodule bump appears.
        let message = self.runner.run(&["show", "--pretty=format:%B", sha]).await?;

        let mut story_id = extract_story_id(&message);
        for path in &self.follow_paths {
            if story_id != 0 {
                break;
            }
            story_id = self.bumped_story_id(&message, path).await?;
        }

        Ok(Commit {
            hash: sha.to_string(),
            subject: subject.trim_end().to_string(),
            story_id,
            ..Commit::default()
        })
    }

    /// Resolve the story ID of a submodule bump commit.
    ///
    /// Returns 0 without running git when the message does not bump
    /// `follow_path` or carries no subproject pointer.
    async fn bumped_story_id(&self, message: &str, follow_path: &str) -> Result<u64> {
        if !message.contains(&format!("Bump {follow_path}")) {
            return Ok(0);
        }

        let Some(target) = subproject_pattern()
            .captures(message)
            .and_then(|c| c.get(1))
        else {
            return Ok(0);
        };

        debug!("following bump of {follow_path} to {}", target.as_str());

        let submodule_message = self
            .runner
            .run(&[
                "-C",
                follow_path,
                "show",
                "--no-patch",
                "--pretty=format:%B",
                target.as_str(),
            ])
            .await?;

        Ok(extract_story_id(&submodule_message))
    }
}

/// Extract the first story reference from a commit message.
///
/// Missing or unparseable references degrade to 0, never an error.
fn extract_story_id(message: &str) -> u64 {
    story_id_pattern()
        .captures(message)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

#[async_trait]
impl History for GitClient {
    async fn commits(&self, commit_range: &str) -> Result<Vec<Commit>> {
        let log = self
            .runner
            .run(&["log", "--pretty=format:%H", commit_range])
            .await?;

        let mut commits = Vec::new();
        for sha in log.lines().filter(|line| !line.is_empty()) {
            commits.push(self.build_commit(sha).await?);
        }

        debug!("found {} commits in {commit_range}", commits.len());
        Ok(commits)
    }
}
