use lame_delegation_application::ports::DelegationCachePort;
use lame_delegation_application::use_cases::{ResolveDomainUseCase, ScanDomainsUseCase};
use lame_delegation_domain::Config;
use lame_delegation_infrastructure::cache::DelegationCache;
use lame_delegation_infrastructure::dns::HickoryNameserverClient;
use lame_delegation_infrastructure::system::SystemNameserverLookup;
use std::sync::Arc;

pub struct Services {
    pub cache: Arc<dyn DelegationCachePort>,
    pub resolve: Arc<ResolveDomainUseCase>,
    pub scan: Arc<ScanDomainsUseCase>,
}

impl Services {
    pub async fn new(config: &Config) -> Self {
        let client = Arc::new(HickoryNameserverClient::new(
            config.resolver.lookup_timeout_duration(),
            config.resolver.prefer_ipv4,
        ));

        let lookup = Arc::new(
            SystemNameserverLookup::discover(
                Arc::clone(&client),
                &config.resolver.system_resolvers,
                config.resolver.lookup_timeout_duration(),
            )
            .await,
        );

        let cache: Arc<dyn DelegationCachePort> = Arc::new(DelegationCache::new(
            config.cache.ttl_duration(),
            config.cache.max_entries,
        ));

        let resolve = Arc::new(ResolveDomainUseCase::new(
            client,
            lookup,
            Arc::clone(&cache),
            config.resolver.query_timeout_duration(),
        ));

        let scan = Arc::new(ScanDomainsUseCase::new(
            Arc::clone(&resolve),
            config.scan.workers_per_cpu,
            config.scan.progress_interval,
        ));

        Self {
            cache,
            resolve,
            scan,
        }
    }
}
