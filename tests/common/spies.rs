//! Spy doubles for bump discovery collaborators
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use git_bumper::bump::Reporter;
use git_bumper::error::{Error, Result};
use git_bumper::git::History;
use git_bumper::tracker::Tracker;
use git_bumper::types::Commit;
use std::collections::HashMap;
use std::sync::Mutex;

/// Create an unannotated commit, as the history provider would
pub fn commit(hash: &str, subject: &str, story_id: u64) -> Commit {
    Commit {
        hash: hash.to_string(),
        subject: subject.to_string(),
        story_id,
        ..Commit::default()
    }
}

/// History double returning a canned commit list
///
/// Features:
/// - Records every requested range
/// - Error injection for failure path testing
pub struct SpyHistory {
    commits: Vec<Commit>,
    ranges: Mutex<Vec<String>>,
    error_on_commits: Mutex<Option<String>>,
}

impl SpyHistory {
    /// Create a spy that returns the given commits (newest first)
    pub fn with_commits(commits: Vec<Commit>) -> Self {
        Self {
            commits,
            ranges: Mutex::new(Vec::new()),
            error_on_commits: Mutex::new(None),
        }
    }

    /// Create a spy with no commits in range
    pub fn empty() -> Self {
        Self::with_commits(Vec::new())
    }

    /// Make `commits` return an error
    pub fn fail_commits(&self, msg: &str) {
        *self.error_on_commits.lock().unwrap() = Some(msg.to_string());
    }

    /// Get every range `commits` was called with
    pub fn get_ranges(&self) -> Vec<String> {
        self.ranges.lock().unwrap().clone()
    }
}

#[async_trait]
impl History for SpyHistory {
    async fn commits(&self, commit_range: &str) -> Result<Vec<Commit>> {
        self.ranges.lock().unwrap().push(commit_range.to_string());

        if let Some(msg) = self.error_on_commits.lock().unwrap().as_ref() {
            return Err(Error::CommandFailed {
                command: "git log".to_string(),
                code: 128,
                stderr: msg.clone(),
            });
        }

        Ok(self.commits.clone())
    }
}

/// Tracker double with per-story responses and call tracking
pub struct SpyTracker {
    accepted: HashMap<u64, bool>,
    names: HashMap<u64, String>,
    accepted_calls: Mutex<Vec<u64>>,
    name_calls: Mutex<Vec<u64>>,
    error_on_lookup: Mutex<Option<String>>,
}

impl SpyTracker {
    /// Create a spy from `(story_id, accepted, name)` tuples
    pub fn with_stories(stories: &[(u64, bool, &str)]) -> Self {
        Self {
            accepted: stories.iter().map(|&(id, accepted, _)| (id, accepted)).collect(),
            names: stories
                .iter()
                .map(|&(id, _, name)| (id, name.to_string()))
                .collect(),
            accepted_calls: Mutex::new(Vec::new()),
            name_calls: Mutex::new(Vec::new()),
            error_on_lookup: Mutex::new(None),
        }
    }

    /// Create a spy that knows no stories (every lookup is unaccepted)
    pub fn new() -> Self {
        Self::with_stories(&[])
    }

    /// Make every lookup return an error
    pub fn fail_lookup(&self, msg: &str) {
        *self.error_on_lookup.lock().unwrap() = Some(msg.to_string());
    }

    /// Get every story ID `is_accepted` was called with
    pub fn get_accepted_calls(&self) -> Vec<u64> {
        self.accepted_calls.lock().unwrap().clone()
    }

    /// Get every story ID `name` was called with
    pub fn get_name_calls(&self) -> Vec<u64> {
        self.name_calls.lock().unwrap().clone()
    }

    /// Assert each story was asked about exactly once, in any order
    pub fn assert_asked_once_for(&self, ids: &[u64]) {
        let mut calls = self.get_accepted_calls();
        calls.sort_unstable();
        let mut expected = ids.to_vec();
        expected.sort_unstable();
        assert_eq!(
            calls, expected,
            "expected one lookup per story {expected:?} but got {calls:?}"
        );
    }
}

impl Default for SpyTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tracker for SpyTracker {
    async fn is_accepted(&self, story_id: u64) -> Result<bool> {
        self.accepted_calls.lock().unwrap().push(story_id);

        if let Some(msg) = self.error_on_lookup.lock().unwrap().as_ref() {
            return Err(Error::Io(std::io::Error::other(msg.clone())));
        }

        if story_id == 0 {
            return Ok(true);
        }
        Ok(self.accepted.get(&story_id).copied().unwrap_or(false))
    }

    async fn name(&self, story_id: u64) -> Result<String> {
        self.name_calls.lock().unwrap().push(story_id);

        if let Some(msg) = self.error_on_lookup.lock().unwrap().as_ref() {
            return Err(Error::Io(std::io::Error::other(msg.clone())));
        }

        Ok(self.names.get(&story_id).cloned().unwrap_or_default())
    }
}

/// Reporter double that records the full choreography
#[derive(Default)]
pub struct SpyReporter {
    header_ranges: Mutex<Vec<String>>,
    commits: Mutex<Vec<Commit>>,
    footers: Mutex<Vec<Option<String>>>,
}

impl SpyReporter {
    /// Create an empty spy
    pub fn new() -> Self {
        Self::default()
    }

    /// Get every range `header` was called with
    pub fn get_header_ranges(&self) -> Vec<String> {
        self.header_ranges.lock().unwrap().clone()
    }

    /// Get every commit passed to `commit`, in call order
    pub fn get_commits(&self) -> Vec<Commit> {
        self.commits.lock().unwrap().clone()
    }

    /// Get every `footer` result, in call order
    pub fn get_footers(&self) -> Vec<Option<String>> {
        self.footers.lock().unwrap().clone()
    }
}

impl Reporter for SpyReporter {
    fn header(&self, commit_range: &str) {
        self.header_ranges
            .lock()
            .unwrap()
            .push(commit_range.to_string());
    }

    fn commit(&self, commit: &Commit) {
        self.commits.lock().unwrap().push(commit.clone());
    }

    fn footer(&self, bump: Option<&str>) {
        self.footers
            .lock()
            .unwrap()
            .push(bump.map(ToString::to_string));
    }
}
