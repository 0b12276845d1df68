//! Bump-point selection
//!
//! Pure selection rule that turns an ordered, annotated commit list into
//! the single deepest hash that is safe to promote.

use crate::types::Commit;
use std::collections::HashSet;
use tracing::debug;

/// Select the deepest safe-to-promote commit.
///
/// `commits` must be ordered oldest first and fully annotated. Returns
/// `None` when no leading span of the range is safe.
///
/// A commit is safe when every commit up to and including it belongs to an
/// accepted story (or to no story at all) and none of those stories has an
/// accepted commit at or beyond the first unaccepted commit. Such a story
/// straddles the promotion boundary, so bumping past its earlier commits
/// would ship only part of it.
pub fn select_bump_point(commits: &[Commit]) -> Option<String> {
    let Some(first_unaccepted) = commits.iter().position(|c| !c.accepted) else {
        // Everything is accepted: the whole range is safe.
        return commits.last().map(|c| c.hash.clone());
    };

    // Stories with accepted commits at or past the boundary. Their earlier
    // commits cannot be promoted without splitting the story.
    let tainted: HashSet<u64> = commits[first_unaccepted..]
        .iter()
        .filter(|c| c.accepted && c.story_id != 0)
        .map(|c| c.story_id)
        .collect();

    debug!(
        "first unaccepted commit at index {first_unaccepted}, {} tainted stories",
        tainted.len()
    );

    let mut candidate: Option<&Commit> = None;
    for commit in &commits[..first_unaccepted] {
        if tainted.contains(&commit.story_id) {
            break;
        }
        candidate = Some(commit);
    }

    candidate.map(|c| c.hash.clone())
}
