use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Recursive resolvers ("ip:port") used for the initial nameserver
    /// lookup. Empty means "read /etc/resolv.conf".
    #[serde(default)]
    pub system_resolvers: Vec<String>,

    /// Per-exchange timeout for delegation and authority queries, in seconds.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    /// Timeout for the platform nameserver lookup and for resolving a
    /// nameserver hostname to an address, in seconds.
    #[serde(default = "default_lookup_timeout")]
    pub lookup_timeout: u64,

    #[serde(default = "default_true")]
    pub prefer_ipv4: bool,
}

impl ResolverConfig {
    pub fn query_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.query_timeout)
    }

    pub fn lookup_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            system_resolvers: Vec::new(),
            query_timeout: default_query_timeout(),
            lookup_timeout: default_lookup_timeout(),
            prefer_ipv4: true,
        }
    }
}

fn default_query_timeout() -> u64 {
    30
}

fn default_lookup_timeout() -> u64 {
    10
}

fn default_true() -> bool {
    true
}
