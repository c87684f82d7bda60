use super::RecordRewriter;
use ferrous_rewrite_domain::{DomainError, RecordSection, RewriteRule};
use hickory_proto::op::{Message, Query};
use hickory_proto::rr::Record;
use std::sync::Arc;

/// Per-exchange rewrite state: the question the client actually asked and
/// the rule snapshot in force when the exchange started.
#[derive(Debug, Clone)]
pub struct RewriteContext {
    original_question: Query,
    rules: Arc<Vec<RewriteRule>>,
    response_rewrite: bool,
}

impl RewriteContext {
    /// Captures the first question of `request`.
    pub fn new(request: &Message, rules: Arc<Vec<RewriteRule>>) -> Result<Self, DomainError> {
        let original_question = request
            .queries()
            .first()
            .cloned()
            .ok_or(DomainError::MissingQuestion)?;

        Ok(Self {
            original_question,
            rules,
            response_rewrite: false,
        })
    }

    pub fn with_response_rewrite(mut self, enabled: bool) -> Self {
        self.response_rewrite = enabled;
        self
    }

    pub fn original_question(&self) -> &Query {
        &self.original_question
    }

    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    pub fn response_rewrite(&self) -> bool {
        self.response_rewrite
    }

    /// Restores the question, then rewrites answer and extra records when
    /// response rewriting is on. Returns how many records changed.
    pub fn apply(&self, response: &mut Message) -> usize {
        self.restore_question(response);

        if !self.response_rewrite {
            return 0;
        }

        let answers = rewrite_section(response.answers_mut(), RecordSection::Answer, &self.rules);
        let additionals =
            rewrite_section(response.additionals_mut(), RecordSection::Extra, &self.rules);
        answers + additionals
    }

    fn restore_question(&self, response: &mut Message) {
        if response.queries().is_empty() {
            response.add_query(self.original_question.clone());
        } else {
            response.queries_mut()[0] = self.original_question.clone();
        }
    }
}

fn rewrite_section(records: &mut [Record], section: RecordSection, rules: &[RewriteRule]) -> usize {
    records
        .iter_mut()
        .map(|record| RecordRewriter::rewrite(record, section, rules))
        .filter(|changed| *changed)
        .count()
}
