use ferrous_rewrite_domain::{Continuation, NameMatcher, RewriteRule, SectionScope};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::{A, CNAME, HINFO, SRV};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use std::net::Ipv4Addr;
use std::sync::Arc;

pub fn name(value: &str) -> Name {
    Name::from_ascii(value).unwrap()
}

pub fn a_record(owner: &str, ttl: u32, ip: [u8; 4]) -> Record {
    Record::from_rdata(name(owner), ttl, RData::A(A(Ipv4Addr::from(ip))))
}

pub fn srv_record(owner: &str, ttl: u32, target: &str) -> Record {
    Record::from_rdata(
        name(owner),
        ttl,
        RData::SRV(SRV::new(0, 100, 100, name(target))),
    )
}

pub fn cname_record(owner: &str, ttl: u32, target: &str) -> Record {
    Record::from_rdata(name(owner), ttl, RData::CNAME(CNAME(name(target))))
}

pub fn hinfo_record(owner: &str, ttl: u32) -> Record {
    Record::from_rdata(
        name(owner),
        ttl,
        RData::HINFO(HINFO::new("INTEL-64".to_string(), "RHEL 7.4".to_string())),
    )
}

pub fn srv_target(record: &Record) -> Name {
    match record.data() {
        RData::SRV(srv) => srv.target().clone(),
        other => panic!("expected SRV record, got {:?}", other),
    }
}

pub fn name_rule(section: SectionScope, pattern: &str, replacement: &str) -> RewriteRule {
    RewriteRule::name(section, NameMatcher::regex(pattern).unwrap(), replacement)
}

pub fn continue_rule(section: SectionScope, pattern: &str, replacement: &str) -> RewriteRule {
    name_rule(section, pattern, replacement).with_continuation(Continuation::Continue)
}

pub fn rules(list: Vec<RewriteRule>) -> Arc<Vec<RewriteRule>> {
    Arc::new(list)
}

/// Builds requests and upstream responses the way a forwarder would see them.
pub struct MessageBuilder {
    message: Message,
}

impl MessageBuilder {
    /// Client request carrying a single question.
    pub fn query(qname: &str, qtype: RecordType) -> Self {
        Self::with_question(MessageType::Query, qname, qtype)
    }

    /// Upstream reply echoing the forwarded question.
    pub fn response(qname: &str, qtype: RecordType) -> Self {
        Self::with_question(MessageType::Response, qname, qtype)
    }

    pub fn empty() -> Self {
        Self {
            message: Message::new(0, MessageType::Query, OpCode::Query),
        }
    }

    pub fn empty_response() -> Self {
        Self {
            message: Message::new(0, MessageType::Response, OpCode::Query),
        }
    }

    fn with_question(message_type: MessageType, qname: &str, qtype: RecordType) -> Self {
        let mut message = Message::new(0, message_type, OpCode::Query);
        message.add_query(Query::query(name(qname), qtype));
        Self { message }
    }

    pub fn answer(mut self, record: Record) -> Self {
        self.message.add_answer(record);
        self
    }

    pub fn extra(mut self, record: Record) -> Self {
        self.message.add_additional(record);
        self
    }

    pub fn build(self) -> Message {
        self.message
    }
}
