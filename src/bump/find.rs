//! Bump discovery orchestration

use crate::bump::{Reporter, annotate_commits, select_bump_point};
use crate::error::Result;
use crate::git::History;
use crate::tracker::Tracker;
use std::sync::Arc;
use tracing::debug;

/// Walk `commit_range`, annotate each commit with tracker state, and return
/// the deepest safe-to-promote hash.
///
/// Commits are reported newest first, the order git produces them; the
/// selection itself runs oldest first. An empty range reports and returns
/// `None` without touching the tracker. History or tracker failures abort
/// the run before the footer is reported.
pub async fn find_bump(
    commit_range: &str,
    history: &dyn History,
    tracker: &Arc<dyn Tracker>,
    reporter: &dyn Reporter,
) -> Result<Option<String>> {
    reporter.header(commit_range);

    let mut commits = history.commits(commit_range).await?;
    if commits.is_empty() {
        debug!("no commits in {commit_range}");
        reporter.footer(None);
        return Ok(None);
    }

    annotate_commits(&mut commits, tracker).await?;

    for commit in &commits {
        reporter.commit(commit);
    }

    let oldest_first: Vec<_> = commits.iter().rev().cloned().collect();
    let bump = select_bump_point(&oldest_first);

    reporter.footer(bump.as_deref());
    Ok(bump)
}
