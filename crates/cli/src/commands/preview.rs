use crate::di::RewriteServices;
use async_trait::async_trait;
use clap::Args;
use ferrous_rewrite_domain::DomainError;
use ferrous_rewrite_infrastructure::dns::ResponseWriter;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::{A, SRV};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use std::io::Write;
use std::net::Ipv4Addr;
use std::str::FromStr;
use tracing::info;

#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Question as sent by the client
    #[arg(long)]
    question: String,

    /// Question type
    #[arg(long, default_value = "A")]
    qtype: String,

    /// Question as forwarded upstream (after the forward rewrite)
    #[arg(long)]
    upstream: String,

    /// Owner names of answer records (defaults to the upstream question)
    #[arg(long = "answer", value_name = "NAME")]
    answers: Vec<String>,

    /// Make answers SRV records pointing at this target
    #[arg(long, value_name = "NAME")]
    srv_target: Option<String>,

    /// Owner names of additional A records
    #[arg(long = "extra", value_name = "NAME")]
    extras: Vec<String>,

    /// TTL of the synthesized records
    #[arg(long, default_value_t = 300)]
    ttl: u32,
}

pub async fn run_preview(services: &RewriteServices, args: PreviewArgs) -> anyhow::Result<()> {
    let qtype = RecordType::from_str(&args.qtype)
        .map_err(|e| anyhow::anyhow!("Invalid record type {}: {}", args.qtype, e))?;

    let mut request = Message::new(0, MessageType::Query, OpCode::Query);
    request.add_query(Query::query(parse_name(&args.question)?, qtype));

    let response = upstream_response(&args, qtype)?;

    info!(
        question = %args.question,
        upstream = %args.upstream,
        "Reverting synthesized upstream response"
    );

    let mut reverter =
        services
            .rule_table
            .reverter(StdoutWriter, &request, services.response_rewrite)?;
    reverter.write_message(response).await?;

    Ok(())
}

fn upstream_response(args: &PreviewArgs, qtype: RecordType) -> anyhow::Result<Message> {
    let mut response = Message::new(0, MessageType::Response, OpCode::Query);
    response.add_query(Query::query(parse_name(&args.upstream)?, qtype));

    let owners = if args.answers.is_empty() {
        vec![args.upstream.clone()]
    } else {
        args.answers.clone()
    };

    let srv_target = args.srv_target.as_deref().map(parse_name).transpose()?;
    for (index, owner) in owners.iter().enumerate() {
        let rdata = match &srv_target {
            Some(target) => RData::SRV(SRV::new(0, 100, 100, target.clone())),
            None => RData::A(A(documentation_address(index))),
        };
        response.add_answer(Record::from_rdata(parse_name(owner)?, args.ttl, rdata));
    }

    for (index, owner) in args.extras.iter().enumerate() {
        let rdata = RData::A(A(documentation_address(owners.len() + index)));
        response.add_additional(Record::from_rdata(parse_name(owner)?, args.ttl, rdata));
    }

    Ok(response)
}

fn parse_name(value: &str) -> anyhow::Result<Name> {
    let fqdn = if value.ends_with('.') {
        value.to_string()
    } else {
        format!("{}.", value)
    };
    Name::from_ascii(&fqdn).map_err(|e| anyhow::anyhow!("Invalid DNS name {}: {}", value, e))
}

/// 192.0.2.0/24 (TEST-NET-1).
fn documentation_address(index: usize) -> Ipv4Addr {
    Ipv4Addr::new(192, 0, 2, (index % 254 + 1) as u8)
}

/// Prints finalized responses in presentation format.
struct StdoutWriter;

#[async_trait]
impl ResponseWriter for StdoutWriter {
    async fn write_message(&mut self, response: Message) -> Result<(), DomainError> {
        let mut out = String::from(";; QUESTION SECTION:\n");
        for query in response.queries() {
            out.push_str(&format!(
                ";{}\t{}\t{}\n",
                query.name(),
                query.query_class(),
                query.query_type()
            ));
        }

        for (title, records) in [
            ("ANSWER", response.answers()),
            ("ADDITIONAL", response.additionals()),
        ] {
            if records.is_empty() {
                continue;
            }
            out.push_str(&format!("\n;; {} SECTION:\n", title));
            for record in records {
                out.push_str(&format!(
                    "{}\t{}\t{}\t{}\t{}\n",
                    record.name(),
                    record.ttl(),
                    record.dns_class(),
                    record.record_type(),
                    record.data()
                ));
            }
        }

        self.write_bytes(out.as_bytes()).await.map(|_| ())
    }

    async fn write_bytes(&mut self, buf: &[u8]) -> Result<usize, DomainError> {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(buf)
            .and_then(|_| stdout.flush())
            .map(|_| buf.len())
            .map_err(|e| DomainError::IoError(e.to_string()))
    }
}
