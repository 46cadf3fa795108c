use lame_delegation_domain::{DnsQuery, DomainError, RecordType};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// One hostname per line. Lines are trimmed; blanks and `#` comments are
/// skipped.
pub fn parse_host_list(content: &str, record_type: RecordType) -> Vec<DnsQuery> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|host| DnsQuery::new(host, record_type))
        .collect()
}

pub async fn read_host_list(
    path: &Path,
    record_type: RecordType,
) -> Result<Vec<DnsQuery>, DomainError> {
    let content = fs::read_to_string(path).await.map_err(|e| {
        DomainError::IoError(format!("Failed to read host list {}: {}", path.display(), e))
    })?;

    let queries = parse_host_list(&content, record_type);
    debug!(path = %path.display(), hosts = queries.len(), "Host list loaded");
    Ok(queries)
}
