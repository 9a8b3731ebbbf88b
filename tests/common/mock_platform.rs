//! Mock platform service for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use branch_stamp::error::{Error, Result};
use branch_stamp::platform::PlatformService;
use branch_stamp::types::{PlatformConfig, PullRequestFields, UpdatePayload};
use std::sync::Mutex;

/// Call record for `update_pull_request`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCall {
    pub pr_number: u64,
    pub payload: UpdatePayload,
}

/// Simple mock platform service for testing
///
/// Features:
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockPlatformService {
    config: PlatformConfig,
    update_calls: Mutex<Vec<UpdateCall>>,
    error_on_update: Mutex<Option<String>>,
}

impl MockPlatformService {
    /// Create a mock with a default test configuration
    pub fn new() -> Self {
        Self::with_config(PlatformConfig {
            owner: "test".to_string(),
            repo: "repo".to_string(),
            api_url: None,
        })
    }

    /// Create a mock with the given config
    pub fn with_config(config: PlatformConfig) -> Self {
        Self {
            config,
            update_calls: Mutex::new(Vec::new()),
            error_on_update: Mutex::new(None),
        }
    }

    /// Make `update_pull_request` return an error
    pub fn fail_update(&self, msg: &str) {
        *self.error_on_update.lock().unwrap() = Some(msg.to_string());
    }

    /// Get all `update_pull_request` calls
    pub fn get_update_calls(&self) -> Vec<UpdateCall> {
        self.update_calls.lock().unwrap().clone()
    }

    /// Get count of `update_pull_request` calls
    pub fn update_call_count(&self) -> usize {
        self.update_calls.lock().unwrap().len()
    }

    /// Assert that `update_pull_request` was called for a specific PR
    pub fn assert_update_called(&self, pr_number: u64) {
        let calls = self.get_update_calls();
        assert!(
            calls.iter().any(|c| c.pr_number == pr_number),
            "Expected update_pull_request({pr_number}) but got: {calls:?}"
        );
    }

    /// Assert that no update call was made
    pub fn assert_no_updates(&self) {
        let calls = self.get_update_calls();
        assert!(
            calls.is_empty(),
            "Expected no update calls but got: {calls:?}"
        );
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn update_pull_request(
        &self,
        pr_number: u64,
        payload: &UpdatePayload,
    ) -> Result<PullRequestFields> {
        self.update_calls.lock().unwrap().push(UpdateCall {
            pr_number,
            payload: payload.clone(),
        });

        // Check for injected error
        if let Some(msg) = self.error_on_update.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        Ok(PullRequestFields {
            title: payload.title.clone().unwrap_or_default(),
            body: payload.body.clone().unwrap_or_default(),
        })
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
