use async_trait::async_trait;
use ferrous_rewrite_domain::DomainError;
use ferrous_rewrite_infrastructure::dns::ResponseWriter;
use hickory_proto::op::Message;

/// Keeps everything written to it.
#[derive(Default)]
pub struct RecordingWriter {
    pub messages: Vec<Message>,
    pub bytes: Vec<u8>,
}

impl RecordingWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> &Message {
        self.messages.last().expect("no message written")
    }
}

#[async_trait]
impl ResponseWriter for RecordingWriter {
    async fn write_message(&mut self, response: Message) -> Result<(), DomainError> {
        self.messages.push(response);
        Ok(())
    }

    async fn write_bytes(&mut self, buf: &[u8]) -> Result<usize, DomainError> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }
}

/// Rejects every write.
pub struct FailingWriter {
    pub reason: String,
    pub attempts: usize,
}

impl FailingWriter {
    pub fn new(reason: &str) -> Self {
        Self {
            reason: reason.to_string(),
            attempts: 0,
        }
    }
}

#[async_trait]
impl ResponseWriter for FailingWriter {
    async fn write_message(&mut self, _response: Message) -> Result<(), DomainError> {
        self.attempts += 1;
        Err(DomainError::ResponseWriteFailed(self.reason.clone()))
    }

    async fn write_bytes(&mut self, _buf: &[u8]) -> Result<usize, DomainError> {
        self.attempts += 1;
        Err(DomainError::IoError(self.reason.clone()))
    }
}
