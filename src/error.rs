//! Error types for branch-stamp

use crate::types::BranchSource;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// All errors the pipeline can surface
///
/// Configuration and match errors (`Config`, `NoPatternsConfigured`,
/// `NoMatch`, `Regex`) are raised before any external call is made.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration value was present but unusable
    #[error("configuration error: {0}")]
    Config(String),

    /// Neither a base nor a head branch pattern was supplied
    #[error("no branch regex values have been specified")]
    NoPatternsConfigured,

    /// A required branch pattern did not match its branch name
    #[error("{source} branch name does not match pattern #{index} `{pattern}`")]
    NoMatch {
        /// Which branch the pattern was applied to
        source: BranchSource,
        /// Position of the pattern in its configured list
        index: usize,
        /// The pattern text
        pattern: String,
    },

    /// A configured branch pattern failed to compile
    #[error("invalid branch regex: {0}")]
    Regex(#[from] regex::Error),

    /// The Actions event context could not be read
    #[error("event context error: {0}")]
    Event(String),

    /// The event payload was not valid JSON
    #[error("failed to parse event payload: {0}")]
    Json(#[from] serde_json::Error),

    /// GitHub API error with a contextual message
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// GitHub API error from octocrab
    #[error("GitHub API error: {0}")]
    Octocrab(#[from] octocrab::Error),

    /// I/O error (event payload or output file)
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
