//! Tracker API client implementation

use crate::error::Result;
use crate::tracker::Tracker;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OnceCell};
use tracing::debug;

/// Hosted tracker API endpoint
const DEFAULT_BASE_URL: &str = "https://www.pivotaltracker.com/services/v5";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Deserialize)]
struct Story {
    current_state: String,
    name: String,
}

/// Tracker client with per-story memoization
///
/// Each distinct story is fetched at most once per client instance;
/// concurrent lookups for the same story share a single in-flight request.
pub struct TrackerClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    cache: Mutex<HashMap<u64, Arc<OnceCell<Story>>>>,
}

impl TrackerClient {
    /// Create a client against the hosted tracker endpoint
    pub fn new(token: Option<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string(), token)
    }

    /// Create a client against a custom endpoint (self-hosted trackers, tests)
    pub fn with_base_url(base_url: String, token: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            cache: Mutex::new(HashMap::new()),
        }
    }

    async fn story(&self, story_id: u64) -> Result<Story> {
        // The map lock is only held long enough to grab the story's cell;
        // the fetch itself runs under the cell's initialization.
        let cell = {
            let mut cache = self.cache.lock().await;
            Arc::clone(cache.entry(story_id).or_default())
        };

        let story = cell.get_or_try_init(|| self.fetch_story(story_id)).await?;
        Ok(story.clone())
    }

    async fn fetch_story(&self, story_id: u64) -> Result<Story> {
        let url = format!("{}/stories/{story_id}", self.base_url);
        debug!("fetching story {story_id}");

        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.header("X-TrackerToken", token);
        }

        let story = request.send().await?.error_for_status()?.json().await?;
        Ok(story)
    }
}

#[async_trait]
impl Tracker for TrackerClient {
    async fn is_accepted(&self, story_id: u64) -> Result<bool> {
        if story_id == 0 {
            return Ok(true);
        }

        Ok(self.story(story_id).await?.current_state == "accepted")
    }

    async fn name(&self, story_id: u64) -> Result<String> {
        if story_id == 0 {
            return Ok(String::new());
        }

        Ok(self.story(story_id).await?.name)
    }
}
