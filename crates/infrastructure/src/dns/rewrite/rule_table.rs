use super::{ResponseReverter, ResponseWriter};
use arc_swap::ArcSwap;
use ferrous_rewrite_domain::{DomainError, RewriteConfig, RewriteRule};
use hickory_proto::op::Message;
use std::sync::Arc;
use tracing::info;

/// Live response rule table.
///
/// Exchanges take a snapshot when they start and keep it until their
/// response is written; [`replace`](RuleTable::replace) only affects
/// exchanges started afterwards.
pub struct RuleTable {
    rules: ArcSwap<Vec<RewriteRule>>,
}

impl RuleTable {
    pub fn new(rules: Vec<RewriteRule>) -> Self {
        Self {
            rules: ArcSwap::from_pointee(rules),
        }
    }

    pub fn from_config(config: &RewriteConfig) -> Result<Self, DomainError> {
        Ok(Self::new(RewriteRule::build_table(&config.response_rules)?))
    }

    #[inline]
    pub fn snapshot(&self) -> Arc<Vec<RewriteRule>> {
        self.rules.load_full()
    }

    pub fn replace(&self, rules: Vec<RewriteRule>) {
        info!(rules = rules.len(), "Response rewrite rules replaced");
        self.rules.store(Arc::new(rules));
    }

    pub fn len(&self) -> usize {
        self.rules.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.load().is_empty()
    }

    /// Whether any enabled rule exists, i.e. record rewriting has work to do.
    pub fn has_response_rules(&self) -> bool {
        self.rules.load().iter().any(|rule| rule.active)
    }

    /// Starts an exchange against the current snapshot.
    pub fn reverter<W: ResponseWriter>(
        &self,
        inner: W,
        request: &Message,
        response_rewrite: bool,
    ) -> Result<ResponseReverter<W>, DomainError> {
        Ok(ResponseReverter::new(inner, request, self.snapshot())?
            .with_response_rewrite(response_rewrite))
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
