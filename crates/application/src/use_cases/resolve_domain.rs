use lame_delegation_domain::{DnsQuery, NameserverSet, ScanResult, ZoneChain};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::ports::{DelegationCachePort, NameserverLookupPort, NameserverQueryPort};
use crate::services::{AuthorityVerifier, DelegationValidator, NameserverDirectory};

/// Walks a hostname's delegation chain from the root and decides whether
/// any step of it is lame.
pub struct ResolveDomainUseCase {
    directory: NameserverDirectory,
    validator: DelegationValidator,
    verifier: AuthorityVerifier,
    cache: Arc<dyn DelegationCachePort>,
}

impl ResolveDomainUseCase {
    pub fn new(
        client: Arc<dyn NameserverQueryPort>,
        lookup: Arc<dyn NameserverLookupPort>,
        cache: Arc<dyn DelegationCachePort>,
        query_timeout: Duration,
    ) -> Self {
        Self {
            directory: NameserverDirectory::new(lookup, Arc::clone(&cache)),
            validator: DelegationValidator::new(Arc::clone(&client), query_timeout),
            verifier: AuthorityVerifier::new(client, query_timeout),
            cache,
        }
    }

    /// Never fails: every problem found ends up on the returned result.
    #[instrument(skip(self, query), fields(domain = %query.hostname, record_type = %query.record_type))]
    pub async fn execute(&self, query: &DnsQuery) -> ScanResult {
        let mut result = ScanResult::new(Arc::clone(&query.hostname));
        let chain = ZoneChain::build(&query.hostname);
        let target = chain.target();

        let mut nameservers: Option<NameserverSet> = None;

        for (parent, child) in chain.hops() {
            let parent_nameservers = match nameservers.take() {
                Some(known) => known,
                None => match self.directory.resolve(parent, target).await {
                    Ok(found) => found,
                    Err(e) => {
                        warn!(zone = %parent, error = %e, "No nameservers to start from");
                        result.record_lame(e);
                        return result;
                    }
                },
            };

            if let Some(cached) = self.cache.get(child) {
                debug!(zone = %child, nameservers = %cached, "Delegation cache hit");
                nameservers = Some(cached);
                continue;
            }

            let outcome = self
                .validator
                .validate(parent, &parent_nameservers, child)
                .await;

            for error in outcome.server_errors {
                result.record_lame(error);
            }

            if let Some(failure) = outcome.failure {
                warn!(parent = %parent, child = %child, error = %failure, "Inconsistent delegation");
                result.record_lame(failure);
                return result;
            }

            if let Some(child_nameservers) = outcome.child_nameservers {
                if child != target {
                    self.cache.insert(child, child_nameservers.clone());
                }
                nameservers = Some(child_nameservers);
            }
        }

        let final_nameservers = match nameservers {
            Some(found) => found,
            None => match self.directory.resolve(target, target).await {
                Ok(found) => found,
                Err(e) => {
                    result.record_lame(e);
                    return result;
                }
            },
        };

        let report = self
            .verifier
            .verify(target, query.record_type, &final_nameservers)
            .await;
        for error in report.errors {
            result.record_lame(error);
        }

        if result.contains_lame_delegation {
            warn!(
                error = ?result.error.as_ref().map(|e| e.to_string()),
                "Lame delegation detected"
            );
        } else {
            info!(nameservers = %final_nameservers, "Delegation chain healthy");
        }

        result
    }
}
