use super::{Continuation, FieldKind, NameMatcher, RecordSection, SectionScope};
use crate::capture_template;
use crate::config::ResponseRuleConfig;
use crate::DomainError;
use std::fmt;
use std::sync::Arc;

/// One response-side rewrite, already validated.
///
/// Rules are evaluated in table order. They never fail at evaluation time:
/// a rule that does not match is a no-op.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    pub active: bool,
    pub section: SectionScope,
    pub field: FieldKind,
    pub matcher: Option<NameMatcher>,
    pub replacement: Arc<str>,
    pub ttl: u32,
    pub continuation: Continuation,
}

impl RewriteRule {
    pub fn name(
        section: SectionScope,
        matcher: NameMatcher,
        replacement: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            active: true,
            section,
            field: FieldKind::Name,
            matcher: Some(matcher),
            replacement: replacement.into(),
            ttl: 0,
            continuation: Continuation::Stop,
        }
    }

    pub fn ttl(section: SectionScope, ttl: u32) -> Self {
        Self {
            active: true,
            section,
            field: FieldKind::Ttl,
            matcher: None,
            replacement: Arc::from(""),
            ttl,
            continuation: Continuation::Stop,
        }
    }

    pub fn with_continuation(mut self, continuation: Continuation) -> Self {
        self.continuation = continuation;
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    #[inline]
    pub fn applies_to(&self, section: RecordSection) -> bool {
        self.active && self.section.covers(section)
    }

    /// Rewritten value for `value`, or `None` if this rule leaves it alone.
    pub fn rewrite_name(&self, value: &str) -> Option<String> {
        if self.field != FieldKind::Name {
            return None;
        }
        let matcher = self.matcher.as_ref()?;
        capture_template::expand(matcher, &self.replacement, value)
    }

    pub fn from_config(config: &ResponseRuleConfig) -> Result<Self, DomainError> {
        let section: SectionScope = config
            .section
            .parse()
            .map_err(DomainError::InvalidRewriteRule)?;
        let field: FieldKind = config
            .field
            .parse()
            .map_err(DomainError::InvalidRewriteRule)?;
        let continuation: Continuation = config
            .continuation
            .parse()
            .map_err(DomainError::InvalidRewriteRule)?;

        let rule = match field {
            FieldKind::Name => {
                let pattern = non_empty(config.pattern.as_deref()).ok_or_else(|| {
                    DomainError::InvalidRewriteRule("Name rule requires a pattern".to_string())
                })?;
                let replacement = non_empty(config.replacement.as_deref()).ok_or_else(|| {
                    DomainError::InvalidRewriteRule(
                        "Name rule requires a replacement".to_string(),
                    )
                })?;

                let matcher = NameMatcher::from_tokens(&config.match_type, pattern)?;

                RewriteRule::name(section, matcher, normalize_fqdn(replacement))
            }
            FieldKind::Ttl => {
                let ttl = config.ttl.ok_or_else(|| {
                    DomainError::InvalidRewriteRule("TTL rule requires a ttl value".to_string())
                })?;
                RewriteRule::ttl(section, ttl)
            }
        };

        Ok(rule
            .with_continuation(continuation)
            .with_active(config.enabled))
    }

    /// Builds a rule table, reporting the position of the first invalid entry.
    pub fn build_table(configs: &[ResponseRuleConfig]) -> Result<Vec<RewriteRule>, DomainError> {
        configs
            .iter()
            .enumerate()
            .map(|(index, config)| {
                Self::from_config(config).map_err(|e| DomainError::InvalidRewriteRuleAt {
                    index,
                    reason: e.to_string(),
                })
            })
            .collect()
    }
}

impl fmt::Display for RewriteRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.field, &self.matcher) {
            (FieldKind::Name, Some(matcher)) => write!(
                f,
                "{} name {} -> {} ({})",
                self.section, matcher, self.replacement, self.continuation
            ),
            (FieldKind::Name, None) => write!(f, "{} name <none> ({})", self.section, self.continuation),
            (FieldKind::Ttl, _) => write!(
                f,
                "{} ttl {} ({})",
                self.section, self.ttl, self.continuation
            ),
        }?;
        if !self.active {
            write!(f, " [disabled]")?;
        }
        Ok(())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn normalize_fqdn(value: &str) -> String {
    if value.ends_with('.') {
        value.to_string()
    } else {
        format!("{}.", value)
    }
}
