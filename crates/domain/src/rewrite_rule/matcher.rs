use crate::DomainError;
use fancy_regex::Regex;
use std::fmt;
use std::sync::Arc;

/// How a name rule decides whether it applies to a value.
#[derive(Debug, Clone)]
pub enum NameMatcher {
    /// Whole-value, ASCII case-insensitive comparison. Exposes only group 0.
    Exact(Arc<str>),
    Regex(Regex),
}

impl NameMatcher {
    /// Matches names as they appear on the wire, so `value` is made fully
    /// qualified first.
    pub fn exact(value: &str) -> Self {
        if value.ends_with('.') {
            NameMatcher::Exact(Arc::from(value))
        } else {
            NameMatcher::Exact(Arc::from(format!("{}.", value)))
        }
    }

    pub fn regex(pattern: &str) -> Result<Self, DomainError> {
        Regex::new(pattern)
            .map(NameMatcher::Regex)
            .map_err(|e| DomainError::InvalidPattern(format!("{}: {}", pattern, e)))
    }

    pub fn from_tokens(match_type: &str, pattern: &str) -> Result<Self, DomainError> {
        match match_type.to_lowercase().as_str() {
            "" | "regex" => Self::regex(pattern),
            "exact" => Ok(Self::exact(pattern)),
            other => Err(DomainError::InvalidRewriteRule(format!(
                "Unknown match type: {}",
                other
            ))),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            NameMatcher::Exact(_) => "exact",
            NameMatcher::Regex(_) => "regex",
        }
    }

    pub fn pattern(&self) -> &str {
        match self {
            NameMatcher::Exact(value) => value,
            NameMatcher::Regex(regex) => regex.as_str(),
        }
    }

    /// Leftmost-first match of `input`.
    ///
    /// Index 0 is the whole match, 1..N the parenthesized groups. Groups that
    /// did not participate in the match are reported as empty strings.
    /// Regex runtime failures (backtrack limit) count as no match.
    pub fn captures<'t>(&self, input: &'t str) -> Option<Vec<&'t str>> {
        match self {
            NameMatcher::Exact(value) => {
                if input.eq_ignore_ascii_case(value) {
                    Some(vec![input])
                } else {
                    None
                }
            }
            NameMatcher::Regex(regex) => {
                let caps = regex.captures(input).ok().flatten()?;
                Some(
                    (0..caps.len())
                        .map(|i| caps.get(i).map_or("", |m| m.as_str()))
                        .collect(),
                )
            }
        }
    }
}

impl fmt::Display for NameMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.pattern())
    }
}
