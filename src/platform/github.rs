//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{PlatformConfig, PullRequestFields, UpdatePayload};
use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::debug;

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    config: PlatformConfig,
}

impl GitHubService {
    /// Create a new GitHub service
    ///
    /// `api_url` overrides the default `api.github.com` endpoint for
    /// GitHub Enterprise hosts (the runner supplies it as `GITHUB_API_URL`).
    pub fn new(token: &str, owner: String, repo: String, api_url: Option<String>) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        if let Some(ref url) = api_url {
            builder = builder
                .base_uri(url)
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
        }

        let client = builder
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        Ok(Self {
            client,
            config: PlatformConfig {
                owner,
                repo,
                api_url,
            },
        })
    }
}

#[async_trait]
impl PlatformService for GitHubService {
    async fn update_pull_request(
        &self,
        pr_number: u64,
        payload: &UpdatePayload,
    ) -> Result<PullRequestFields> {
        debug!(pr_number, "sending pull request update");
        let pulls = self.client.pulls(&self.config.owner, &self.config.repo);
        let mut builder = pulls.update(pr_number);

        if let Some(ref title) = payload.title {
            builder = builder.title(title);
        }
        if let Some(ref body) = payload.body {
            builder = builder.body(body);
        }

        let pr = builder.send().await?;

        debug!(pr_number, "pull request updated");
        Ok(PullRequestFields {
            title: pr.title.as_deref().unwrap_or_default().to_string(),
            body: pr.body.clone().unwrap_or_default(),
        })
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
