use async_trait::async_trait;
use lame_delegation_application::ports::{NameserverLookupPort, DNS_PORT};
use lame_delegation_domain::{DomainError, NameserverSet, RecordType};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::system_conf::system_resolvers;
use crate::dns::HickoryNameserverClient;

/// Used when neither the configuration nor the platform names a resolver.
pub const FALLBACK_RESOLVERS: [IpAddr; 2] = [
    IpAddr::V4(Ipv4Addr::new(1, 1, 1, 1)),
    IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)),
];

/// NS lookup through the host's recursive resolvers.
pub struct SystemNameserverLookup {
    client: Arc<HickoryNameserverClient>,
    resolvers: Vec<SocketAddr>,
    timeout: Duration,
}

impl SystemNameserverLookup {
    pub fn new(
        client: Arc<HickoryNameserverClient>,
        resolvers: Vec<SocketAddr>,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            resolvers,
            timeout,
        }
    }

    /// Picks resolvers in order: `configured`, then the host configuration,
    /// then the public fallbacks.
    pub async fn discover(
        client: Arc<HickoryNameserverClient>,
        configured: &[String],
        timeout: Duration,
    ) -> Self {
        let mut resolvers: Vec<SocketAddr> = configured
            .iter()
            .filter_map(|entry| parse_resolver(entry))
            .collect();

        if resolvers.is_empty() {
            resolvers = system_resolvers();
        }

        if resolvers.is_empty() {
            warn!("No system resolvers found, using public fallbacks");
            resolvers = FALLBACK_RESOLVERS
                .iter()
                .map(|ip| SocketAddr::new(*ip, DNS_PORT))
                .collect();
        }

        debug!(resolvers = ?resolvers, "Nameserver lookup resolvers selected");
        Self::new(client, resolvers, timeout)
    }

    pub fn resolvers(&self) -> &[SocketAddr] {
        &self.resolvers
    }
}

/// Accepts `ip` or `ip:port`.
pub fn parse_resolver(entry: &str) -> Option<SocketAddr> {
    entry
        .parse::<SocketAddr>()
        .ok()
        .or_else(|| entry.parse::<IpAddr>().ok().map(|ip| SocketAddr::new(ip, DNS_PORT)))
}

#[async_trait]
impl NameserverLookupPort for SystemNameserverLookup {
    #[instrument(skip(self), level = "debug")]
    async fn lookup_nameservers(&self, zone: &str) -> Result<NameserverSet, DomainError> {
        let mut outcome = Err(DomainError::UnresolvableNameserver(zone.to_string()));

        for resolver in &self.resolvers {
            match self
                .client
                .exchange(*resolver, zone, RecordType::NS, self.timeout)
                .await
            {
                Ok(response) => {
                    let nameservers: NameserverSet = response
                        .answers
                        .iter()
                        .filter_map(|r| r.nameserver())
                        .collect();
                    debug!(
                        zone = %zone,
                        resolver = %resolver,
                        nameservers = %nameservers,
                        "NS lookup answered"
                    );
                    if !nameservers.is_empty() {
                        return Ok(nameservers);
                    }
                    outcome = Ok(nameservers);
                }
                Err(e) => {
                    debug!(
                        zone = %zone,
                        resolver = %resolver,
                        error = %e,
                        "NS lookup failed, trying next resolver"
                    );
                    if outcome.is_err() {
                        outcome = Err(e);
                    }
                }
            }
        }

        outcome
    }
}
