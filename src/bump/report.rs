//! Reporting hooks for bump discovery
//!
//! This trait allows different interfaces (CLI, automation, tests) to
//! observe discovery as it happens without coupling the core to a terminal.

use crate::types::Commit;

/// Presentation callbacks invoked during bump discovery
///
/// Implementations receive the commit range up front, then each annotated
/// commit newest first, and finally the selection result.
pub trait Reporter: Send + Sync {
    /// Called once, before history is read
    fn header(&self, commit_range: &str);

    /// Called for each commit, newest first, after annotation
    fn commit(&self, commit: &Commit);

    /// Called once with the selection result
    fn footer(&self, bump: Option<&str>);
}

/// Reporter that prints nothing, for tests or embedders
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn header(&self, _commit_range: &str) {}
    fn commit(&self, _commit: &Commit) {}
    fn footer(&self, _bump: Option<&str>) {}
}
