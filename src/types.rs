//! Core types for branch-stamp

use serde::Serialize;

/// Which branch of the pull request a value refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchSource {
    /// The branch the pull request merges into
    Base,
    /// The branch the pull request comes from
    Head,
}

impl std::fmt::Display for BranchSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base => write!(f, "base"),
            Self::Head => write!(f, "head"),
        }
    }
}

impl std::error::Error for BranchSource {}

/// Which pull request field a decision applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// The pull request title
    Title,
    /// The pull request body
    Body,
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Title => write!(f, "title"),
            Self::Body => write!(f, "body"),
        }
    }
}

/// How rendered template text combines with the existing field text
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum UpdateAction {
    /// Replace the field with the rendered text
    Replace,
    /// Put the rendered text in front of the existing text
    Prefix,
    /// Append the rendered text after the existing text
    Suffix,
    /// Remove the first occurrence of the rendered text from the field
    Remove,
}

impl std::fmt::Display for UpdateAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Replace => write!(f, "replace"),
            Self::Prefix => write!(f, "prefix"),
            Self::Suffix => write!(f, "suffix"),
            Self::Remove => write!(f, "remove"),
        }
    }
}

/// Separator inserted between rendered text and existing text
///
/// Titles use [`Separator::None`] or [`Separator::Space`]; bodies use
/// [`Separator::Newlines`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Separator {
    /// No separator
    None,
    /// A single space
    Space,
    /// A run of newlines
    Newlines(usize),
}

impl Separator {
    /// Render the separator as literal text
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::None => String::new(),
            Self::Space => " ".to_string(),
            Self::Newlines(count) => "\n".repeat(*count),
        }
    }
}

/// Current title and body of a pull request
///
/// Absent fields arrive as empty strings, mirroring the event payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestFields {
    /// Pull request title
    pub title: String,
    /// Pull request body
    pub body: String,
}

/// The patch for the single pull request update call
///
/// Only fields whose decision required a change are present. An empty
/// payload must never be sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdatePayload {
    /// New title, if the title decision required a change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New body, if the body decision required a change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl UpdatePayload {
    /// True when no field changed and no external call should be made
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none()
    }
}

/// Named outputs surfaced to the host workflow after a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutputs {
    /// First captured base branch text, when base patterns were configured
    pub base_match: Option<String>,
    /// First captured head branch text, when head patterns were configured
    pub head_match: Option<String>,
    /// Whether the title decision required an update
    pub title_updated: bool,
    /// Whether the body decision required an update
    pub body_updated: bool,
    /// The new title, when one was computed
    pub new_title: Option<String>,
    /// The new body, when one was computed
    pub new_body: Option<String>,
}

impl RunOutputs {
    /// The outputs as ordered name/value pairs, using the workflow-facing
    /// output names.
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = Vec::new();
        if let Some(ref text) = self.base_match {
            entries.push(("baseMatch", text.clone()));
        }
        if let Some(ref text) = self.head_match {
            entries.push(("headMatch", text.clone()));
        }
        entries.push(("titleUpdated", self.title_updated.to_string()));
        entries.push(("bodyUpdated", self.body_updated.to_string()));
        if let Some(ref text) = self.new_title {
            entries.push(("newTitle", text.clone()));
        }
        if let Some(ref text) = self.new_body {
            entries.push(("newBody", text.clone()));
        }
        entries
    }
}

/// Platform configuration
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Custom API endpoint (None for api.github.com)
    pub api_url: Option<String>,
}
