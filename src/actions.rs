//! GitHub Actions runtime integration
//!
//! Reads the pull request context the way the runner provides it
//! (`GITHUB_REPOSITORY` plus the event payload at `GITHUB_EVENT_PATH`),
//! writes run outputs back through `GITHUB_OUTPUT`, and emits the workflow
//! commands the runner renders as annotations.

use crate::error::{Error, Result};
use crate::types::RunOutputs;
use serde::Deserialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Pull request context extracted from the runner environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionContext {
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Pull request number
    pub pr_number: u64,
    /// Base branch name
    pub base_ref: String,
    /// Head branch name
    pub head_ref: String,
    /// Current title (empty when absent)
    pub title: String,
    /// Current body (empty when absent)
    pub body: String,
    /// Enterprise API endpoint, when the runner reports a non-default one
    pub api_url: Option<String>,
}

#[derive(Deserialize)]
struct EventPayload {
    pull_request: Option<PullRequestEvent>,
}

#[derive(Deserialize)]
struct PullRequestEvent {
    number: u64,
    title: Option<String>,
    body: Option<String>,
    base: BranchRef,
    head: BranchRef,
}

#[derive(Deserialize)]
struct BranchRef {
    #[serde(rename = "ref")]
    ref_field: String,
}

const DEFAULT_API_URL: &str = "https://api.github.com";

impl ActionContext {
    /// Build the context from the runner environment
    ///
    /// Requires `GITHUB_REPOSITORY` and a `pull_request` event payload at
    /// `GITHUB_EVENT_PATH`.
    pub fn from_env() -> Result<Self> {
        let repository = std::env::var("GITHUB_REPOSITORY")
            .map_err(|_| Error::Event("GITHUB_REPOSITORY not set".to_string()))?;
        let event_path = std::env::var("GITHUB_EVENT_PATH")
            .map_err(|_| Error::Event("GITHUB_EVENT_PATH not set".to_string()))?;
        let raw_event = std::fs::read_to_string(&event_path)?;
        let api_url = std::env::var("GITHUB_API_URL")
            .ok()
            .filter(|url| url != DEFAULT_API_URL);

        Self::from_event_json(&repository, &raw_event, api_url)
    }

    /// Build the context from raw values (testable without environment)
    pub fn from_event_json(
        repository: &str,
        raw_event: &str,
        api_url: Option<String>,
    ) -> Result<Self> {
        let (owner, repo) = repository.split_once('/').ok_or_else(|| {
            Error::Event(format!("invalid GITHUB_REPOSITORY format: {repository}"))
        })?;

        let payload: EventPayload = serde_json::from_str(raw_event)?;
        let pr = payload.pull_request.ok_or_else(|| {
            Error::Event("event payload has no pull_request (not a pull_request event?)".to_string())
        })?;

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            pr_number: pr.number,
            base_ref: pr.base.ref_field,
            head_ref: pr.head.ref_field,
            title: pr.title.unwrap_or_default(),
            body: pr.body.unwrap_or_default(),
            api_url,
        })
    }
}

/// Append run outputs to the file `GITHUB_OUTPUT` points at
///
/// Silently skipped when the variable is unset (local runs).
pub fn write_outputs(outputs: &RunOutputs) -> Result<()> {
    match std::env::var("GITHUB_OUTPUT") {
        Ok(path) => append_outputs(Path::new(&path), outputs),
        Err(_) => Ok(()),
    }
}

/// Append outputs as `name=value` lines to the given file
///
/// Multiline values use the heredoc form the runner expects.
pub fn append_outputs(path: &Path, outputs: &RunOutputs) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    for (name, value) in outputs.entries() {
        write_output_line(&mut file, name, &value)?;
    }
    Ok(())
}

fn write_output_line(out: &mut impl Write, name: &str, value: &str) -> Result<()> {
    if value.contains('\n') {
        let mut delimiter = "ghadelimiter".to_string();
        while value.contains(&delimiter) {
            delimiter.push('_');
        }
        writeln!(out, "{name}<<{delimiter}")?;
        writeln!(out, "{value}")?;
        writeln!(out, "{delimiter}")?;
    } else {
        writeln!(out, "{name}={value}")?;
    }
    Ok(())
}

/// Emit a `::warning::` workflow command
pub fn warning(message: &str) {
    println!("::warning::{}", escape_data(message));
}

/// Emit an `::error::` workflow command
pub fn error(message: &str) {
    println!("::error::{}", escape_data(message));
}

/// Workflow command data escaping per the runner's rules
fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
