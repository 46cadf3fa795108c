use hickory_proto::op::Message;
use hickory_proto::rr::{RData, Record};
use lame_delegation_domain::{DomainError, NameserverResponse, ResponseRecord};
use tracing::debug;

const HEADER_LEN: usize = 12;

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<NameserverResponse, DomainError> {
        if response_bytes.len() < HEADER_LEN {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response too short: {} bytes",
                response_bytes.len()
            )));
        }

        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let authoritative = message.metadata.authoritative;
        let truncated = message.metadata.truncation;

        let answers: Vec<ResponseRecord> = message.answers.iter().map(convert_record).collect();
        let authorities: Vec<ResponseRecord> =
            message.authorities.iter().map(convert_record).collect();

        debug!(
            authoritative = authoritative,
            truncated = truncated,
            answers = answers.len(),
            authority = authorities.len(),
            "DNS response parsed"
        );

        Ok(NameserverResponse {
            authoritative,
            truncated,
            answers,
            authorities,
        })
    }
}

fn convert_record(record: &Record) -> ResponseRecord {
    let name = record.name.to_utf8();
    match &record.data {
        RData::NS(ns) => ResponseRecord::ns(&name, &ns.0.to_utf8()),
        RData::SOA(_) => ResponseRecord::soa(&name),
        _ => ResponseRecord::other(&name, u16::from(record.record_type())),
    }
}
