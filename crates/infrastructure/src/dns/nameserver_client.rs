use async_trait::async_trait;
use lame_delegation_application::ports::{NameserverQueryPort, DNS_PORT};
use lame_delegation_domain::{DomainError, NameserverResponse, RecordType};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, instrument};

use super::transport::resolver::{pick_address, resolve_all};
use super::transport::tcp::TcpTransport;
use super::transport::udp::UdpTransport;
use super::transport::DnsTransport;
use super::wire::{MessageBuilder, ResponseParser};

/// Sends single questions straight to nameservers over UDP, retrying over
/// TCP when the reply is truncated.
pub struct HickoryNameserverClient {
    lookup_timeout: Duration,
    prefer_ipv4: bool,
}

impl HickoryNameserverClient {
    pub fn new(lookup_timeout: Duration, prefer_ipv4: bool) -> Self {
        Self {
            lookup_timeout,
            prefer_ipv4,
        }
    }

    /// Finds the address to contact for a nameserver hostname.
    pub async fn server_address(&self, nameserver: &str) -> Result<SocketAddr, DomainError> {
        let addrs = resolve_all(nameserver, DNS_PORT, self.lookup_timeout).await?;
        pick_address(&addrs, self.prefer_ipv4)
            .ok_or_else(|| DomainError::UnresolvableNameserver(nameserver.to_string()))
    }

    /// One exchange with a server whose address is already known.
    #[instrument(skip(self), level = "debug")]
    pub async fn exchange(
        &self,
        server: SocketAddr,
        name: &str,
        record_type: RecordType,
        timeout: Duration,
    ) -> Result<NameserverResponse, DomainError> {
        let (id, query) = MessageBuilder::build_query(name, record_type)?;

        let reply = UdpTransport::new(server).send(&query, timeout).await?;
        let response = ResponseParser::parse(&reply.bytes)?;

        if !response.truncated {
            return Ok(response);
        }

        debug!(server = %server, id, "Truncated UDP reply, retrying over TCP");
        let reply = TcpTransport::new(server).send(&query, timeout).await?;
        ResponseParser::parse(&reply.bytes)
    }
}

#[async_trait]
impl NameserverQueryPort for HickoryNameserverClient {
    async fn query(
        &self,
        nameserver: &str,
        name: &str,
        record_type: RecordType,
        timeout: Duration,
    ) -> Result<NameserverResponse, DomainError> {
        let server = self.server_address(nameserver).await?;
        self.exchange(server, name, record_type, timeout).await
    }
}
