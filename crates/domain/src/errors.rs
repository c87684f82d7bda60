use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid rewrite rule: {0}")]
    InvalidRewriteRule(String),

    #[error("Invalid rewrite rule #{index}: {reason}")]
    InvalidRewriteRuleAt { index: usize, reason: String },

    #[error("Invalid rewrite pattern: {0}")]
    InvalidPattern(String),

    #[error("Request carries no question to restore")]
    MissingQuestion,

    #[error("Failed to write response: {0}")]
    ResponseWriteFailed(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
