//! Lame Delegation Check Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod dns_response;
pub mod errors;
pub mod nameserver_set;
pub mod scan_result;
pub mod zone_chain;

pub use config::{
    CacheConfig, CliOverrides, Config, ConfigError, LoggingConfig, ResolverConfig, ScanConfig,
};
pub use dns_query::DnsQuery;
pub use dns_record::RecordType;
pub use dns_response::{NameserverResponse, RecordData, ResponseRecord};
pub use errors::{DelegationError, DomainError};
pub use nameserver_set::NameserverSet;
pub use scan_result::ScanResult;
pub use zone_chain::{fqdn, ZoneChain, ROOT_ZONE};
