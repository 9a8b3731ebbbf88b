//! Platform services for GitHub
//!
//! Provides the REST seam for the single pull request update call.

mod github;

pub use github::GitHubService;

use crate::error::Result;
use crate::types::{PlatformConfig, PullRequestFields, UpdatePayload};
use async_trait::async_trait;

/// Platform service trait for pull request operations
///
/// This trait abstracts the hosted REST endpoint, allowing the update
/// pipeline to be exercised against a mock in tests.
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// Rewrite the title and/or body of an existing pull request
    ///
    /// Only fields present in the payload are touched. Returns the fields
    /// as the platform stored them.
    async fn update_pull_request(
        &self,
        pr_number: u64,
        payload: &UpdatePayload,
    ) -> Result<PullRequestFields>;

    /// Get the platform configuration
    fn config(&self) -> &PlatformConfig;
}
