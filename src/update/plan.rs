//! Update planning - pure functions for deciding title/body rewrites
//!
//! This module contains the pure, testable merge-decision logic. No I/O
//! happens here - all data is passed in, making it easy to unit test.

use crate::matcher::Matches;
use crate::template::{CaseFlags, render};
use crate::types::{
    BranchSource, FieldKind, PullRequestFields, RunOutputs, Separator, UpdateAction, UpdatePayload,
};

/// Declarative settings driving the decision for one field
#[derive(Debug, Clone)]
pub struct FieldSettings {
    /// Which field these settings apply to
    pub field: FieldKind,
    /// Template to render, None when the field is not configured
    pub template: Option<String>,
    /// How rendered text combines with the existing text
    pub action: UpdateAction,
    /// Separator between rendered and existing text for prefix/suffix
    pub separator: Separator,
    /// Uppercase flags for substituted text
    pub case: CaseFlags,
}

/// Outcome of the merge decision for a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldDecision {
    /// No template configured for this field; nothing to decide
    NotConfigured,
    /// The field already satisfies the rendered template
    AlreadySatisfied,
    /// The field should be rewritten to the given text
    Update(String),
}

impl FieldDecision {
    /// Whether this decision requires an update call
    #[must_use]
    pub const fn should_update(&self) -> bool {
        matches!(self, Self::Update(_))
    }

    /// The new field text, when an update is required
    #[must_use]
    pub fn new_text(&self) -> Option<&str> {
        match self {
            Self::Update(text) => Some(text),
            _ => None,
        }
    }
}

/// Update plan - the functional core output
///
/// Created by [`plan_update`] (pure) and turned into the request payload by
/// [`build_payload`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePlan {
    /// Decision for the title field
    pub title: FieldDecision,
    /// Decision for the body field
    pub body: FieldDecision,
}

/// Decide whether a field needs updating and compute its new text
///
/// Idempotence checks compare both texts lower-cased, so a field that
/// already satisfies the desired state in a different case is left alone.
#[must_use]
pub fn decide(
    current: &str,
    rendered: &str,
    action: UpdateAction,
    separator: &Separator,
) -> FieldDecision {
    let current_lower = current.to_lowercase();
    let rendered_lower = rendered.to_lowercase();

    match action {
        UpdateAction::Replace => {
            if current_lower == rendered_lower {
                FieldDecision::AlreadySatisfied
            } else {
                FieldDecision::Update(rendered.to_string())
            }
        }
        UpdateAction::Prefix => {
            if current_lower.starts_with(&rendered_lower) {
                FieldDecision::AlreadySatisfied
            } else {
                FieldDecision::Update(format!("{rendered}{}{current}", separator.render()))
            }
        }
        UpdateAction::Suffix => {
            if current_lower.ends_with(&rendered_lower) {
                FieldDecision::AlreadySatisfied
            } else {
                FieldDecision::Update(format!("{current}{}{rendered}", separator.render()))
            }
        }
        UpdateAction::Remove => remove_first(current, rendered)
            .map_or(FieldDecision::AlreadySatisfied, FieldDecision::Update),
    }
}

/// Remove the first occurrence of `needle` from `text`, case-insensitively
///
/// A whitespace seam left on both sides of the removal collapses to a single
/// separator, and the result is trimmed at the string edges, so removing
/// `[JIRA-123]` from `[JIRA-123] Fix bug` yields `Fix bug`. Returns None
/// when `needle` does not occur.
fn remove_first(text: &str, needle: &str) -> Option<String> {
    if needle.is_empty() {
        return None;
    }
    // ASCII case folding keeps byte offsets valid; non-ASCII bytes must
    // match exactly, so `start` always lands on a char boundary.
    let start = text
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))?;
    let end = start + needle.len();

    let before = &text[..start];
    let after = &text[end..];
    let seam_on_both_sides = before.chars().next_back().is_some_and(char::is_whitespace)
        && after.chars().next().is_some_and(char::is_whitespace);
    let joined = if seam_on_both_sides {
        format!("{}{after}", before.trim_end())
    } else {
        format!("{before}{after}")
    };
    Some(joined.trim().to_string())
}

/// Decide one field from its settings
///
/// Returns [`FieldDecision::NotConfigured`] when the field has no template.
#[must_use]
pub fn plan_field(settings: &FieldSettings, current: &str, matches: &Matches) -> FieldDecision {
    let Some(ref template) = settings.template else {
        return FieldDecision::NotConfigured;
    };
    let rendered = render(template, matches, settings.case);
    decide(current, &rendered, settings.action, &settings.separator)
}

/// Create the update plan for both fields (PURE - no I/O)
#[must_use]
pub fn plan_update(
    title_settings: &FieldSettings,
    body_settings: &FieldSettings,
    fields: &PullRequestFields,
    matches: &Matches,
) -> UpdatePlan {
    UpdatePlan {
        title: plan_field(title_settings, &fields.title, matches),
        body: plan_field(body_settings, &fields.body, matches),
    }
}

/// Build the request payload from a plan
///
/// Returns None when neither field changed; the caller must treat that as
/// success and skip the external call entirely.
#[must_use]
pub fn build_payload(plan: &UpdatePlan) -> Option<UpdatePayload> {
    let payload = UpdatePayload {
        title: plan.title.new_text().map(ToString::to_string),
        body: plan.body.new_text().map(ToString::to_string),
    };
    if payload.is_empty() { None } else { Some(payload) }
}

/// Collect the workflow-facing outputs for a run
#[must_use]
pub fn run_outputs(plan: &UpdatePlan, matches: &Matches) -> RunOutputs {
    RunOutputs {
        base_match: matches.first(BranchSource::Base).map(ToString::to_string),
        head_match: matches.first(BranchSource::Head).map(ToString::to_string),
        title_updated: plan.title.should_update(),
        body_updated: plan.body.should_update(),
        new_title: plan.title.new_text().map(ToString::to_string),
        new_body: plan.body.new_text().map(ToString::to_string),
    }
}
