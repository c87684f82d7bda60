use async_trait::async_trait;
use ferrous_rewrite_domain::DomainError;
use hickory_proto::op::Message;

/// Downstream side of an exchange: where a finished response goes.
#[async_trait]
pub trait ResponseWriter: Send {
    async fn write_message(&mut self, response: Message) -> Result<(), DomainError>;

    /// Raw payload path for transports that write bytes directly.
    async fn write_bytes(&mut self, buf: &[u8]) -> Result<usize, DomainError>;
}

