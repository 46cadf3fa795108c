use dashmap::DashMap;
use lame_delegation_application::ports::DelegationCachePort;
use lame_delegation_domain::{fqdn, NameserverSet};
use rustc_hash::FxBuildHasher;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

struct DelegationEntry {
    nameservers: NameserverSet,
    expires_at: Instant,
}

/// Zone → nameserver cache shared by every worker of a scan.
///
/// Entries expire after a fixed TTL. Expired entries are dropped lazily on
/// read, and swept in small batches when the map reaches `max_entries`.
pub struct DelegationCache {
    cache: DashMap<Arc<str>, DelegationEntry, FxBuildHasher>,
    ttl: Duration,
    max_entries: usize,
}

impl DelegationCache {
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            cache: DashMap::with_capacity_and_hasher(max_entries.min(4096), FxBuildHasher),
            ttl,
            max_entries,
        }
    }

    fn make_room(&self) {
        let now = Instant::now();
        let expired: Vec<Arc<str>> = self
            .cache
            .iter()
            .filter(|e| now >= e.value().expires_at)
            .map(|e| Arc::clone(e.key()))
            .take(64)
            .collect();
        for zone in &expired {
            self.cache.remove(zone);
        }

        if self.cache.len() >= self.max_entries {
            // The shard guard held by `iter` must be gone before `remove`.
            let victim = self.cache.iter().next().map(|e| Arc::clone(e.key()));
            if let Some(zone) = victim {
                self.cache.remove(&zone);
            }
        }
    }
}

impl DelegationCachePort for DelegationCache {
    fn get(&self, zone: &str) -> Option<NameserverSet> {
        let key = fqdn(zone);
        let now = Instant::now();

        let hit = {
            let entry = self.cache.get(key.as_str())?;
            (now < entry.expires_at).then(|| entry.nameservers.clone())
        };

        if hit.is_none() {
            debug!(zone = %key, "Delegation cache entry expired");
            self.cache.remove_if(key.as_str(), |_, entry| now >= entry.expires_at);
        }
        hit
    }

    fn insert(&self, zone: &str, nameservers: NameserverSet) {
        if self.cache.len() >= self.max_entries {
            self.make_room();
        }
        let entry = DelegationEntry {
            nameservers,
            expires_at: Instant::now() + self.ttl,
        };
        self.cache.insert(Arc::from(fqdn(zone)), entry);
    }

    fn len(&self) -> usize {
        self.cache.len()
    }
}
