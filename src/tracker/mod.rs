//! Tracker story lookups
//!
//! Resolves story IDs to acceptance state and display names over the
//! tracker's REST API.

mod client;

pub use client::TrackerClient;

use crate::error::Result;
use async_trait::async_trait;

/// Tracker service trait for story acceptance queries
///
/// Story ID 0 means "no linked story" and is trivially accepted with an
/// empty name; implementations must not hit the network for it.
#[async_trait]
pub trait Tracker: Send + Sync {
    /// Whether the story is in the accepted state
    async fn is_accepted(&self, story_id: u64) -> Result<bool>;

    /// The story's display name
    async fn name(&self, story_id: u64) -> Result<String>;
}
