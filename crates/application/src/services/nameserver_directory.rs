use lame_delegation_domain::{DelegationError, NameserverSet};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::{DelegationCachePort, NameserverLookupPort};

/// Finds the nameservers of the zone a walk starts from.
pub struct NameserverDirectory {
    lookup: Arc<dyn NameserverLookupPort>,
    cache: Arc<dyn DelegationCachePort>,
}

impl NameserverDirectory {
    pub fn new(lookup: Arc<dyn NameserverLookupPort>, cache: Arc<dyn DelegationCachePort>) -> Self {
        Self { lookup, cache }
    }

    /// Cache first, platform lookup on a miss. A looked-up set is written
    /// back unless `zone` is the walk's own `target`.
    #[instrument(skip(self, target), level = "debug")]
    pub async fn resolve(&self, zone: &str, target: &str) -> Result<NameserverSet, DelegationError> {
        if let Some(cached) = self.cache.get(zone) {
            debug!(zone = %zone, nameservers = %cached, "Nameserver cache hit");
            return Ok(cached);
        }

        match self.lookup.lookup_nameservers(zone).await {
            Ok(nameservers) if !nameservers.is_empty() => {
                debug!(zone = %zone, nameservers = %nameservers, "Nameservers looked up");
                if zone != target {
                    self.cache.insert(zone, nameservers.clone());
                }
                Ok(nameservers)
            }
            Ok(_) => {
                debug!(zone = %zone, "Nameserver lookup returned no records");
                Err(DelegationError::NoNameServersFound {
                    name: zone.to_string(),
                })
            }
            Err(e) => {
                debug!(zone = %zone, error = %e, "Nameserver lookup failed");
                Err(DelegationError::NoNameServersFound {
                    name: zone.to_string(),
                })
            }
        }
    }
}
