mod delegation_cache_port;
mod nameserver_lookup;
mod nameserver_query;

pub use delegation_cache_port::DelegationCachePort;
pub use nameserver_lookup::NameserverLookupPort;
pub use nameserver_query::{server_label, NameserverQueryPort, DNS_PORT};
