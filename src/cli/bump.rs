//! The bump command

use crate::cli::report::{QuietReporter, VerboseReporter};
use anyhow::Result;
use git_bumper::bump::{Reporter, find_bump};
use git_bumper::git::{GitClient, GitCommandRunner};
use git_bumper::tracker::{Tracker, TrackerClient};
use std::env;
use std::sync::Arc;

/// Comma-separated submodule paths whose bump commits carry the story ID
const FOLLOW_BUMPS_OF: &str = "FOLLOW_BUMPS_OF";

/// Tracker API token; requests go unauthenticated without it
const TRACKER_API_TOKEN: &str = "TRACKER_API_TOKEN";

/// Tracker API base URL override (self-hosted trackers, tests)
const TRACKER_API_URL: &str = "TRACKER_API_URL";

/// Run bump discovery over `commit_range` and print the result
pub async fn run_bump(commit_range: &str, verbose: bool) -> Result<()> {
    let runner = Arc::new(GitCommandRunner);
    let history = GitClient::new(runner).with_follow_paths(follow_paths_from_env());

    let token = env::var(TRACKER_API_TOKEN).ok().filter(|t| !t.is_empty());
    let base_url = env::var(TRACKER_API_URL).ok().filter(|u| !u.is_empty());
    let custom_tracker = base_url.is_some();
    let tracker: Arc<dyn Tracker> = match base_url {
        Some(url) => Arc::new(TrackerClient::with_base_url(url, token)),
        None => Arc::new(TrackerClient::new(token)),
    };

    let reporter: Box<dyn Reporter> = if verbose {
        let reporter = VerboseReporter::new();
        Box::new(if custom_tracker {
            reporter.without_story_links()
        } else {
            reporter
        })
    } else {
        Box::new(QuietReporter::new())
    };

    find_bump(commit_range, &history, &tracker, reporter.as_ref()).await?;

    Ok(())
}

fn follow_paths_from_env() -> Vec<String> {
    env::var(FOLLOW_BUMPS_OF)
        .map(|paths| {
            paths
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(ToString::to_string)
                .collect()
        })
        .unwrap_or_default()
}
