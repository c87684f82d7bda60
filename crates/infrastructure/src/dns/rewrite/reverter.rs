use super::{ResponseWriter, RewriteContext};
use async_trait::async_trait;
use ferrous_rewrite_domain::{DomainError, RewriteRule};
use hickory_proto::op::Message;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReverterState {
    Created,
    Finalized,
}

/// Wraps the downstream writer of one exchange and undoes the forward
/// rewrite on the response before passing it on.
///
/// Clients compare the echoed question with what they sent and drop
/// mismatches, so the original question is always put back. Record
/// rewriting on top of that is opt-in via [`with_response_rewrite`].
///
/// [`with_response_rewrite`]: ResponseReverter::with_response_rewrite
pub struct ResponseReverter<W> {
    inner: W,
    context: RewriteContext,
    state: ReverterState,
}

impl<W: ResponseWriter> ResponseReverter<W> {
    pub fn new(
        inner: W,
        request: &Message,
        rules: Arc<Vec<RewriteRule>>,
    ) -> Result<Self, DomainError> {
        Ok(Self::from_context(inner, RewriteContext::new(request, rules)?))
    }

    pub fn from_context(inner: W, context: RewriteContext) -> Self {
        Self {
            inner,
            context,
            state: ReverterState::Created,
        }
    }

    pub fn with_response_rewrite(mut self, enabled: bool) -> Self {
        self.context = self.context.with_response_rewrite(enabled);
        self
    }

    pub fn context(&self) -> &RewriteContext {
        &self.context
    }

    pub fn state(&self) -> ReverterState {
        self.state
    }

    pub fn is_finalized(&self) -> bool {
        self.state == ReverterState::Finalized
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Restores and rewrites `response`, then hands it downstream.
    ///
    /// The only error is the downstream writer's, returned unchanged.
    pub async fn finalize(&mut self, mut response: Message) -> Result<(), DomainError> {
        if self.is_finalized() {
            warn!(
                question = %self.context.original_question().name(),
                "Response already finalized for this exchange; reverting again"
            );
        }

        let rewritten = self.context.apply(&mut response);
        self.state = ReverterState::Finalized;

        debug!(
            question = %self.context.original_question().name(),
            answers = response.answers().len(),
            additionals = response.additionals().len(),
            rewritten,
            "Response reverted"
        );

        self.inner.write_message(response).await
    }
}

#[async_trait]
impl<W: ResponseWriter> ResponseWriter for ResponseReverter<W> {
    async fn write_message(&mut self, response: Message) -> Result<(), DomainError> {
        self.finalize(response).await
    }

    async fn write_bytes(&mut self, buf: &[u8]) -> Result<usize, DomainError> {
        self.inner.write_bytes(buf).await
    }
}
