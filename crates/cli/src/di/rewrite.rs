use ferrous_rewrite_domain::Config;
use ferrous_rewrite_infrastructure::dns::RuleTable;
use std::sync::Arc;
use tracing::{info, warn};

pub struct RewriteServices {
    pub rule_table: Arc<RuleTable>,
    pub response_rewrite: bool,
}

impl RewriteServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let rule_table = Arc::new(RuleTable::new(config.rewrite_rules()?));
        let response_rewrite = config.rewrite.response_rewrite;

        if response_rewrite && !rule_table.has_response_rules() {
            warn!("Response rewriting enabled but no active response rules are configured");
        }

        info!(
            rules = rule_table.len(),
            response_rewrite, "Response rewrite rules loaded"
        );

        Ok(Self {
            rule_table,
            response_rewrite,
        })
    }
}
