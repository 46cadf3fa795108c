use lame_delegation_domain::NameserverSet;

/// Zone → delegated nameserver cache shared by every pipeline run in the
/// process. Implementations must be safe for concurrent reads and writes
/// from any worker and must drop entries once their TTL has elapsed.
pub trait DelegationCachePort: Send + Sync {
    fn get(&self, zone: &str) -> Option<NameserverSet>;
    fn insert(&self, zone: &str, nameservers: NameserverSet);
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
