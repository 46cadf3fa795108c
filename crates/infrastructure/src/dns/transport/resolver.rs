use lame_delegation_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

/// Resolves a hostname to all its socket addresses (IPv4 and IPv6).
pub async fn resolve_all(
    hostname: &str,
    port: u16,
    timeout: Duration,
) -> Result<Vec<SocketAddr>, DomainError> {
    let host = hostname.trim_end_matches('.');
    let target = if host.contains(':') {
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    };

    let addrs_iter = tokio::time::timeout(timeout, tokio::net::lookup_host(&target))
        .await
        .map_err(|_| DomainError::TransportTimeout {
            server: target.clone(),
        })?
        .map_err(|e| {
            DomainError::UnresolvableNameserver(format!("{}: {}", target, e))
        })?;

    let addrs: Vec<SocketAddr> = addrs_iter.collect();

    if addrs.is_empty() {
        return Err(DomainError::UnresolvableNameserver(target));
    }

    Ok(addrs)
}

/// First address of the preferred family, or the first address at all.
pub fn pick_address(addrs: &[SocketAddr], prefer_ipv4: bool) -> Option<SocketAddr> {
    addrs
        .iter()
        .find(|a| a.is_ipv4() == prefer_ipv4)
        .or_else(|| addrs.first())
        .copied()
}
