//! Action input configuration
//!
//! Inputs arrive the way the GitHub Actions runner delivers them: one
//! `INPUT_<name>` environment variable per declared action input. clap's env
//! support binds them directly, so the same options also work as plain CLI
//! flags for local runs. There is no ambient configuration state; the parsed
//! struct is passed by value into the pipeline.

use crate::template::CaseFlags;
use crate::types::{FieldKind, Separator, UpdateAction};
use crate::update::FieldSettings;
use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser};

/// All recognized action inputs
///
/// Boolean inputs take explicit `true`/`false` values, matching the string
/// form the runner hands over. Multi-pattern inputs are newline-separated,
/// matching multiline YAML input values.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "branch-stamp",
    version,
    about = "Stamp pull request titles and bodies with text matched from branch names"
)]
pub struct Inputs {
    /// Token used for the pull request update call
    #[arg(long, env = "INPUT_REPO-TOKEN", hide_env_values = true)]
    pub repo_token: String,

    /// Regex patterns applied to the base branch name (one per line)
    #[arg(long, env = "INPUT_BASE-BRANCH-REGEX", value_delimiter = '\n')]
    pub base_branch_regex: Vec<String>,

    /// Regex patterns applied to the head branch name (one per line)
    #[arg(long, env = "INPUT_HEAD-BRANCH-REGEX", value_delimiter = '\n')]
    pub head_branch_regex: Vec<String>,

    /// Lowercase the branch name before matching
    #[arg(
        long,
        env = "INPUT_LOWERCASE-BRANCH",
        action = ArgAction::Set,
        value_parser = FalseyValueParser::new(),
        default_value = "false"
    )]
    pub lowercase_branch: bool,

    /// Template rendered into the title
    #[arg(long, env = "INPUT_TITLE-TEMPLATE")]
    pub title_template: Option<String>,

    /// How the rendered text combines with the existing title
    #[arg(
        long,
        env = "INPUT_TITLE-UPDATE-ACTION",
        value_enum,
        ignore_case = true,
        default_value_t = UpdateAction::Prefix
    )]
    pub title_update_action: UpdateAction,

    /// Insert a space between the rendered text and the existing title
    #[arg(
        long,
        env = "INPUT_TITLE-INSERT-SPACE",
        action = ArgAction::Set,
        value_parser = FalseyValueParser::new(),
        default_value = "false"
    )]
    pub title_insert_space: bool,

    /// Uppercase base branch captures substituted into the title
    #[arg(
        long,
        env = "INPUT_TITLE-UPPERCASE-BASE-MATCH",
        action = ArgAction::Set,
        value_parser = FalseyValueParser::new(),
        default_value = "false"
    )]
    pub title_uppercase_base_match: bool,

    /// Uppercase head branch captures substituted into the title
    #[arg(
        long,
        env = "INPUT_TITLE-UPPERCASE-HEAD-MATCH",
        action = ArgAction::Set,
        value_parser = FalseyValueParser::new(),
        default_value = "false"
    )]
    pub title_uppercase_head_match: bool,

    /// Template rendered into the body
    #[arg(long, env = "INPUT_BODY-TEMPLATE")]
    pub body_template: Option<String>,

    /// How the rendered text combines with the existing body
    #[arg(
        long,
        env = "INPUT_BODY-UPDATE-ACTION",
        value_enum,
        ignore_case = true,
        default_value_t = UpdateAction::Suffix
    )]
    pub body_update_action: UpdateAction,

    /// Newlines separating the rendered text from the existing body
    #[arg(long, env = "INPUT_BODY-NEWLINE-COUNT", default_value_t = 2)]
    pub body_newline_count: usize,

    /// Uppercase base branch captures substituted into the body
    #[arg(
        long,
        env = "INPUT_BODY-UPPERCASE-BASE-MATCH",
        action = ArgAction::Set,
        value_parser = FalseyValueParser::new(),
        default_value = "false"
    )]
    pub body_uppercase_base_match: bool,

    /// Uppercase head branch captures substituted into the body
    #[arg(
        long,
        env = "INPUT_BODY-UPPERCASE-HEAD-MATCH",
        action = ArgAction::Set,
        value_parser = FalseyValueParser::new(),
        default_value = "false"
    )]
    pub body_uppercase_head_match: bool,
}

impl Inputs {
    /// Base branch patterns with whitespace trimmed and blanks dropped
    #[must_use]
    pub fn base_patterns(&self) -> Vec<String> {
        clean_patterns(&self.base_branch_regex)
    }

    /// Head branch patterns with whitespace trimmed and blanks dropped
    #[must_use]
    pub fn head_patterns(&self) -> Vec<String> {
        clean_patterns(&self.head_branch_regex)
    }

    /// Settings driving the title decision
    #[must_use]
    pub fn title_settings(&self) -> FieldSettings {
        FieldSettings {
            field: FieldKind::Title,
            template: clean_template(self.title_template.as_deref()),
            action: self.title_update_action,
            separator: if self.title_insert_space {
                Separator::Space
            } else {
                Separator::None
            },
            case: CaseFlags {
                uppercase_base: self.title_uppercase_base_match,
                uppercase_head: self.title_uppercase_head_match,
            },
        }
    }

    /// Settings driving the body decision
    #[must_use]
    pub fn body_settings(&self) -> FieldSettings {
        FieldSettings {
            field: FieldKind::Body,
            template: clean_template(self.body_template.as_deref()),
            action: self.body_update_action,
            separator: Separator::Newlines(self.body_newline_count),
            case: CaseFlags {
                uppercase_base: self.body_uppercase_base_match,
                uppercase_head: self.body_uppercase_head_match,
            },
        }
    }
}

fn clean_patterns(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|pattern| pattern.trim())
        .filter(|pattern| !pattern.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// A blank template means the field is not configured; template whitespace
/// is otherwise preserved since it may be intentional.
fn clean_template(raw: Option<&str>) -> Option<String> {
    raw.filter(|template| !template.trim().is_empty())
        .map(ToString::to_string)
}
