//! DNS over UDP (RFC 1035 §4.2.1).
//!
//! Messages are sent unframed. A reply with the TC bit set must be retried
//! over TCP by the caller.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use lame_delegation_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Largest reply accepted over UDP.
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn bind_addr(&self) -> SocketAddr {
        if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        }
    }

    fn io_error(&self, e: std::io::Error) -> DomainError {
        if e.kind() == std::io::ErrorKind::ConnectionRefused {
            DomainError::TransportConnectionRefused {
                server: self.server_addr.to_string(),
            }
        } else {
            DomainError::TransportIo {
                server: self.server_addr.to_string(),
                reason: e.to_string(),
            }
        }
    }

    fn timeout_error(&self) -> DomainError {
        DomainError::TransportTimeout {
            server: self.server_addr.to_string(),
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let socket = UdpSocket::bind(self.bind_addr())
            .await
            .map_err(|e| self.io_error(e))?;

        let exchange = async {
            let bytes_sent = socket.send_to(message_bytes, self.server_addr).await?;
            debug!(server = %self.server_addr, bytes_sent, "UDP query sent");

            let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
            loop {
                let (bytes_received, from_addr) = socket.recv_from(&mut recv_buf).await?;

                if from_addr.ip() != self.server_addr.ip() {
                    warn!(
                        expected = %self.server_addr,
                        received_from = %from_addr,
                        "UDP response from unexpected source"
                    );
                    continue;
                }

                if validate_response_id(message_bytes, &recv_buf[..bytes_received], self.server_addr)
                    .is_err()
                {
                    warn!(server = %self.server_addr, "Discarding UDP response with mismatched ID");
                    continue;
                }

                recv_buf.truncate(bytes_received);
                return Ok::<_, std::io::Error>(recv_buf);
            }
        };

        let bytes = tokio::time::timeout(timeout, exchange)
            .await
            .map_err(|_| self.timeout_error())?
            .map_err(|e| self.io_error(e))?;

        debug!(
            server = %self.server_addr,
            bytes_received = bytes.len(),
            "UDP response received"
        );

        Ok(TransportResponse {
            bytes,
        })
    }
}

/// Checks the reply carries the same 16-bit ID as the query.
pub fn validate_response_id(
    query: &[u8],
    response: &[u8],
    server: SocketAddr,
) -> Result<(), DomainError> {
    if query.len() < 2 || response.len() < 2 {
        return Err(DomainError::InvalidDnsResponse(format!(
            "Message too short to carry an ID from {}",
            server
        )));
    }

    let query_id = u16::from_be_bytes([query[0], query[1]]);
    let response_id = u16::from_be_bytes([response[0], response[1]]);

    if query_id != response_id {
        return Err(DomainError::InvalidDnsResponse(format!(
            "ID mismatch from {}: sent {:#06x}, got {:#06x}",
            server, query_id, response_id
        )));
    }

    Ok(())
}

#[cfg(test)]
#[path = "udp_test.rs"]
mod tests;
