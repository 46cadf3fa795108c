use async_trait::async_trait;
use lame_delegation_domain::{DomainError, NameserverSet};

/// Platform-level NS lookup used to seed the first hop of a walk.
#[async_trait]
pub trait NameserverLookupPort: Send + Sync {
    async fn lookup_nameservers(&self, zone: &str) -> Result<NameserverSet, DomainError>;
}
