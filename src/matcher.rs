//! Branch-name matching
//!
//! Applies the configured regex patterns to the pull request branch names
//! and captures the matched text. Matching is all-or-nothing: a single
//! failing pattern fails the whole run before any update is attempted.

use crate::error::{Error, Result};
use crate::types::BranchSource;
use regex::Regex;
use tracing::debug;

/// Branch names carried by a pull request event
#[derive(Debug, Clone, Default)]
pub struct BranchNames {
    /// Base branch name
    pub base: String,
    /// Head branch name
    pub head: String,
}

/// Captured branch text, one entry per configured pattern, in declared order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matches {
    /// Captures from the base branch patterns
    pub base: Vec<String>,
    /// Captures from the head branch patterns
    pub head: Vec<String>,
}

impl Matches {
    /// Capture for a source at a given pattern index
    #[must_use]
    pub fn get(&self, source: BranchSource, index: usize) -> Option<&str> {
        let captures = match source {
            BranchSource::Base => &self.base,
            BranchSource::Head => &self.head,
        };
        captures.get(index).map(String::as_str)
    }

    /// First capture for a source (index 0)
    #[must_use]
    pub fn first(&self, source: BranchSource) -> Option<&str> {
        self.get(source, 0)
    }
}

/// Apply the configured patterns to both branch names
///
/// Each pattern contributes the full text of its first match (capture
/// group 0). `lowercase_branch` lower-cases the branch name before matching;
/// the pattern itself is never transformed.
///
/// # Errors
/// - [`Error::NoPatternsConfigured`] when neither side has patterns
/// - [`Error::NoMatch`] for the first pattern that fails to match
/// - [`Error::Regex`] for a pattern that fails to compile
pub fn match_branches(
    base_patterns: &[String],
    head_patterns: &[String],
    branches: &BranchNames,
    lowercase_branch: bool,
) -> Result<Matches> {
    if base_patterns.is_empty() && head_patterns.is_empty() {
        return Err(Error::NoPatternsConfigured);
    }

    Ok(Matches {
        base: match_source(
            BranchSource::Base,
            base_patterns,
            &branches.base,
            lowercase_branch,
        )?,
        head: match_source(
            BranchSource::Head,
            head_patterns,
            &branches.head,
            lowercase_branch,
        )?,
    })
}

fn match_source(
    source: BranchSource,
    patterns: &[String],
    branch: &str,
    lowercase_branch: bool,
) -> Result<Vec<String>> {
    let name = if lowercase_branch {
        branch.to_lowercase()
    } else {
        branch.to_string()
    };

    let mut captured = Vec::with_capacity(patterns.len());
    for (index, pattern) in patterns.iter().enumerate() {
        let regex = Regex::new(pattern)?;
        let Some(found) = regex.find(&name) else {
            return Err(Error::NoMatch {
                source,
                index,
                pattern: pattern.clone(),
            });
        };
        debug!(%source, index, text = found.as_str(), "matched branch text");
        captured.push(found.as_str().to_string());
    }
    Ok(captured)
}
