use async_trait::async_trait;
use lame_delegation_domain::{DomainError, NameserverResponse, RecordType};
use std::time::Duration;

pub const DNS_PORT: u16 = 53;

/// Sends a single question to a single nameserver.
#[async_trait]
pub trait NameserverQueryPort: Send + Sync {
    async fn query(
        &self,
        nameserver: &str,
        name: &str,
        record_type: RecordType,
        timeout: Duration,
    ) -> Result<NameserverResponse, DomainError>;
}

/// `host:53` label used when reporting a nameserver in errors.
pub fn server_label(nameserver: &str) -> String {
    if nameserver.contains(':') {
        format!("[{}]:{}", nameserver, DNS_PORT)
    } else {
        format!("{}:{}", nameserver, DNS_PORT)
    }
}
