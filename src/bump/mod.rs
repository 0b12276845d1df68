//! Bump-point discovery
//!
//! The core of the tool: given a commit range, decide the deepest commit
//! that is safe to promote into a release branch.

mod annotate;
mod find;
mod report;
mod select;

pub use annotate::annotate_commits;
pub use find::find_bump;
pub use report::{NoopReporter, Reporter};
pub use select::select_bump_point;
