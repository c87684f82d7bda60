//! Ferrous Rewrite Domain Layer
pub mod capture_template;
pub mod config;
pub mod errors;
pub mod rewrite_rule;

pub use config::{CliOverrides, Config, ConfigError, ResponseRuleConfig, RewriteConfig};
pub use errors::DomainError;
pub use rewrite_rule::{
    Continuation, FieldKind, NameMatcher, RecordSection, RewriteRule, SectionScope,
};
