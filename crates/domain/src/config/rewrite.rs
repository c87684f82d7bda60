use serde::{Deserialize, Serialize};

/// Response rewriting configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct RewriteConfig {
    /// Rewrite answer/extra records on the way back. The question is
    /// restored regardless.
    #[serde(default)]
    pub response_rewrite: bool,

    /// Rules in evaluation order
    #[serde(default)]
    pub response_rules: Vec<ResponseRuleConfig>,
}

/// Textual form of a response rule, as written in the config file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResponseRuleConfig {
    #[serde(default = "default_section")]
    pub section: String,

    #[serde(default = "default_field")]
    pub field: String,

    #[serde(default = "default_match_type")]
    pub match_type: String,

    #[serde(default)]
    pub pattern: Option<String>,

    #[serde(default)]
    pub replacement: Option<String>,

    #[serde(default)]
    pub ttl: Option<u32>,

    #[serde(default = "default_continuation")]
    pub continuation: String,

    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl ResponseRuleConfig {
    pub fn name(section: &str, pattern: &str, replacement: &str) -> Self {
        Self {
            section: section.to_string(),
            pattern: Some(pattern.to_string()),
            replacement: Some(replacement.to_string()),
            ..Self::default()
        }
    }

    pub fn ttl(section: &str, ttl: u32) -> Self {
        Self {
            section: section.to_string(),
            field: "ttl".to_string(),
            ttl: Some(ttl),
            ..Self::default()
        }
    }
}

impl Default for ResponseRuleConfig {
    fn default() -> Self {
        Self {
            section: default_section(),
            field: default_field(),
            match_type: default_match_type(),
            pattern: None,
            replacement: None,
            ttl: None,
            continuation: default_continuation(),
            enabled: true,
        }
    }
}

fn default_section() -> String {
    "answer".to_string()
}

fn default_field() -> String {
    "name".to_string()
}

fn default_match_type() -> String {
    "regex".to_string()
}

fn default_continuation() -> String {
    "stop".to_string()
}

fn default_true() -> bool {
    true
}
