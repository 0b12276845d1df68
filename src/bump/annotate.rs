//! Concurrent story annotation

use crate::error::Result;
use crate::tracker::Tracker;
use crate::types::Commit;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::debug;

/// Resolve acceptance state and story names for every commit.
///
/// Each distinct non-zero story ID is looked up exactly once, with all
/// lookups running concurrently; results are fanned back to every commit
/// sharing that ID. Commits without a story are marked accepted with an
/// empty name. The first lookup failure aborts the remaining lookups.
pub async fn annotate_commits(commits: &mut [Commit], tracker: &Arc<dyn Tracker>) -> Result<()> {
    let ids: HashSet<u64> = commits
        .iter()
        .map(|c| c.story_id)
        .filter(|&id| id != 0)
        .collect();

    debug!(
        "annotating {} commits across {} distinct stories",
        commits.len(),
        ids.len()
    );

    let mut lookups: JoinSet<Result<(u64, bool, String)>> = JoinSet::new();
    for id in ids {
        let tracker = Arc::clone(tracker);
        lookups.spawn(async move {
            let accepted = tracker.is_accepted(id).await?;
            let name = tracker.name(id).await?;
            Ok((id, accepted, name))
        });
    }

    let mut stories: HashMap<u64, (bool, String)> = HashMap::new();
    while let Some(joined) = lookups.join_next().await {
        let (id, accepted, name) = joined??;
        stories.insert(id, (accepted, name));
    }

    for commit in commits.iter_mut() {
        if commit.story_id == 0 {
            commit.accepted = true;
            commit.story_name.clear();
        } else if let Some((accepted, name)) = stories.get(&commit.story_id) {
            commit.accepted = *accepted;
            commit.story_name = name.clone();
        }
    }

    Ok(())
}
