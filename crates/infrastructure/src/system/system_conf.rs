use hickory_resolver::config::ResolverConfig;
use std::net::SocketAddr;
use tracing::{debug, warn};

/// Recursive resolvers from the host configuration (`/etc/resolv.conf` on
/// Unix, the registry on Windows). Empty when it cannot be loaded.
pub fn system_resolvers() -> Vec<SocketAddr> {
    #[cfg(any(unix, target_os = "windows"))]
    {
        match hickory_resolver::system_conf::read_system_conf() {
            Ok((config, _opts)) => {
                let resolvers = resolver_addresses(&config);
                debug!(count = resolvers.len(), "Loaded system resolvers");
                return resolvers;
            }
            Err(e) => {
                warn!(error = %e, "Failed to read system resolver configuration");
            }
        }
    }

    Vec::new()
}

/// Server addresses in configuration order. hickory lists each server once
/// per protocol, so duplicates are dropped.
pub fn resolver_addresses(config: &ResolverConfig) -> Vec<SocketAddr> {
    let mut addresses: Vec<SocketAddr> = Vec::new();
    for ns in config.name_servers() {
        if !addresses.contains(&ns.socket_addr) {
            addresses.push(ns.socket_addr);
        }
    }
    addresses
}
