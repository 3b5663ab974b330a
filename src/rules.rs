//! Ordered rewrite rules for link targets. The first rule whose matcher
//! accepts a target decides what happens to it.

use std::borrow::Cow;

use tracing::trace;

/// Prefix that re-roots a repository-root path from `docs/deepwiki/`.
const REROOT_PREFIX: &str = "../../";

/// How a rule recognises a target.
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    /// Target starts with any of these prefixes.
    AnyPrefix(&'static [&'static str]),
    /// Matches every target. Used by the fallback rule.
    Always,
    /// Target equals this string exactly.
    Exact(&'static str),
}

impl Matcher {
    /// Check whether this matcher accepts `target`.
    pub fn matches(self, target: &str) -> bool {
        return match self {
            Matcher::AnyPrefix(prefixes) => prefixes.iter().any(|p| return target.starts_with(p)),
            Matcher::Always => true,
            Matcher::Exact(literal) => target == literal,
        };
    }
}

/// What a rule does to a target it matched.
#[derive(Debug, Clone, Copy)]
pub enum Transform {
    /// Leave the target as it is.
    Keep,
    /// Prepend this string to the target.
    Prepend(&'static str),
    /// Replace the whole target with this string.
    Replace(&'static str),
}

impl Transform {
    /// Apply the transform, borrowing when the target is kept.
    pub fn apply(self, target: &str) -> Cow<'_, str> {
        return match self {
            Transform::Keep => Cow::Borrowed(target),
            Transform::Prepend(prefix) => Cow::Owned(format!("{prefix}{target}")),
            Transform::Replace(replacement) => Cow::Owned(replacement.to_string()),
        };
    }
}

/// One row of the rule table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Decides whether the rule applies.
    pub matcher: Matcher,
    /// Short label used in log output.
    pub name: &'static str,
    /// Applied when the matcher accepts the target.
    pub transform: Transform,
}

/// The rule table, evaluated top to bottom.
pub const RULES: [Rule; 3] = [
    // The legacy download-flow note moved to docs/notes.
    Rule {
        matcher: Matcher::Exact("doc/download-flow.md"),
        name: "legacy-note",
        transform: Transform::Replace("../notes/download_flow.md"),
    },
    Rule {
        matcher: Matcher::AnyPrefix(&["http://", "https://", "#", "../", "./"]),
        name: "already-resolvable",
        transform: Transform::Keep,
    },
    Rule {
        matcher: Matcher::Always,
        name: "root-relative",
        transform: Transform::Prepend(REROOT_PREFIX),
    },
];

/// Find the first rule in `rules` that accepts `target`.
pub fn first_match<'r>(rules: &'r [Rule], target: &str) -> Option<&'r Rule> {
    return rules.iter().find(|rule| return rule.matcher.matches(target));
}

/// Rewrite a link target with the standard rule table.
/// Returns the target borrowed when no rule changes it.
pub fn rewrite_target(target: &str) -> Cow<'_, str> {
    return match first_match(&RULES, target) {
        Some(rule) => {
            trace!(rule = rule.name, link = target, "matched rewrite rule");
            rule.transform.apply(target)
        },
        None => Cow::Borrowed(target),
    };
}
