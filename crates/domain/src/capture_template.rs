//! Positional placeholder substitution for rewrite templates.
//!
//! A template such as `{2}.{1}.{3}` is filled from the capture groups of a
//! matcher: `{0}` is the whole match, `{1}`..`{N}` the parenthesized groups.
//! Placeholders for groups the pattern does not have stay in the output as
//! literal text.

use crate::rewrite_rule::NameMatcher;

/// Matches `input` against `matcher` and fills `template` from the captures.
///
/// Returns `None` when the matcher does not match.
pub fn expand(matcher: &NameMatcher, template: &str, input: &str) -> Option<String> {
    let groups = matcher.captures(input)?;
    Some(fill(template, &groups))
}

/// Substitutes `{i}` for every group index, in ascending order.
pub fn fill(template: &str, groups: &[&str]) -> String {
    let mut output = template.to_string();
    for (index, value) in groups.iter().enumerate() {
        let placeholder = format!("{{{}}}", index);
        if output.contains(&placeholder) {
            output = output.replace(&placeholder, value);
        }
    }
    output
}
