//! Template rendering
//!
//! Substitutes captured branch text into title/body templates. Recognized
//! placeholders are the indexed forms `%baseN%` / `%headN%` and the
//! unindexed forms `%basebranch%` / `%headbranch%` / `%branch%` (index 0).
//! Placeholders with no corresponding capture pass through as literal text.

use crate::matcher::Matches;
use crate::types::BranchSource;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%(?:(base|head)(\d+)|(basebranch|headbranch|branch))%")
        .expect("placeholder pattern is valid")
});

/// Per-template uppercase flags for substituted text
///
/// Applies to the substituted value only, never to literal template text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseFlags {
    /// Uppercase captures from the base branch
    pub uppercase_base: bool,
    /// Uppercase captures from the head branch
    pub uppercase_head: bool,
}

/// Render a template against the captured matches
///
/// Pure and deterministic: the same template, matches, and flags always
/// produce the same output.
#[must_use]
pub fn render(template: &str, matches: &Matches, flags: CaseFlags) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            // unresolved placeholders stay as literal text
            resolve(caps, matches, flags).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn resolve(caps: &Captures<'_>, matches: &Matches, flags: CaseFlags) -> Option<String> {
    let (source, index) = match (caps.get(1), caps.get(3)) {
        (Some(source), _) => {
            let index: usize = caps[2].parse().ok()?;
            let source = if source.as_str() == "base" {
                BranchSource::Base
            } else {
                BranchSource::Head
            };
            (source, index)
        }
        (None, Some(word)) => {
            let source = match word.as_str() {
                "basebranch" => BranchSource::Base,
                "headbranch" => BranchSource::Head,
                // %branch% means the head match when one exists, else base
                _ => {
                    if matches.first(BranchSource::Head).is_some() {
                        BranchSource::Head
                    } else {
                        BranchSource::Base
                    }
                }
            };
            (source, 0)
        }
        (None, None) => return None,
    };

    let value = matches.get(source, index)?;
    let uppercase = match source {
        BranchSource::Base => flags.uppercase_base,
        BranchSource::Head => flags.uppercase_head,
    };
    Some(if uppercase {
        value.to_uppercase()
    } else {
        value.to_string()
    })
}
