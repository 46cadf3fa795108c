use async_trait::async_trait;
use lame_delegation_application::ports::{
    DelegationCachePort, NameserverLookupPort, NameserverQueryPort,
};
use lame_delegation_domain::{
    fqdn, DomainError, NameserverResponse, NameserverSet, RecordType, ResponseRecord,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

type QueryKey = (String, String, RecordType);

/// Scripted nameservers. Unscripted questions time out.
#[derive(Clone, Default)]
pub struct MockNameserverQuery {
    replies: Arc<RwLock<HashMap<QueryKey, Result<NameserverResponse, DomainError>>>>,
    calls: Arc<AtomicUsize>,
    asked: Arc<RwLock<Vec<QueryKey>>>,
}

impl MockNameserverQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(
        &self,
        nameserver: &str,
        name: &str,
        record_type: RecordType,
        response: NameserverResponse,
    ) {
        self.replies.write().unwrap().insert(
            (fqdn(nameserver), fqdn(name), record_type),
            Ok(response),
        );
    }

    pub fn fail(&self, nameserver: &str, name: &str, record_type: RecordType, error: DomainError) {
        self.replies
            .write()
            .unwrap()
            .insert((fqdn(nameserver), fqdn(name), record_type), Err(error));
    }

    /// Every server in `parents` refers `child` to `delegated`.
    pub fn refer(&self, parents: &[&str], child: &str, delegated: &[&str]) {
        for parent in parents {
            self.reply(parent, child, RecordType::NS, referral(child, delegated));
        }
    }

    /// Every server in `servers` answers authoritatively for `name`.
    pub fn answer(&self, servers: &[&str], name: &str, record_type: RecordType) {
        for server in servers {
            self.reply(server, name, record_type, authoritative_answer(name, record_type));
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn was_asked(&self, nameserver: &str, name: &str, record_type: RecordType) -> bool {
        self.asked
            .read()
            .unwrap()
            .contains(&(fqdn(nameserver), fqdn(name), record_type))
    }
}

#[async_trait]
impl NameserverQueryPort for MockNameserverQuery {
    async fn query(
        &self,
        nameserver: &str,
        name: &str,
        record_type: RecordType,
        _timeout: Duration,
    ) -> Result<NameserverResponse, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let key = (fqdn(nameserver), fqdn(name), record_type);
        self.asked.write().unwrap().push(key.clone());

        self.replies
            .read()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| {
                Err(DomainError::TransportTimeout {
                    server: format!("{}:53", nameserver),
                })
            })
    }
}

#[derive(Clone, Default)]
pub struct MockNameserverLookup {
    zones: Arc<RwLock<HashMap<String, NameserverSet>>>,
    calls: Arc<AtomicUsize>,
}

impl MockNameserverLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_zone(self, zone: &str, nameservers: &[&str]) -> Self {
        self.zones
            .write()
            .unwrap()
            .insert(fqdn(zone), nameservers.iter().collect());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NameserverLookupPort for MockNameserverLookup {
    async fn lookup_nameservers(&self, zone: &str) -> Result<NameserverSet, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.zones
            .read()
            .unwrap()
            .get(&fqdn(zone))
            .cloned()
            .ok_or_else(|| DomainError::UnresolvableNameserver(zone.to_string()))
    }
}

#[derive(Clone, Default)]
pub struct MockDelegationCache {
    entries: Arc<RwLock<HashMap<String, NameserverSet>>>,
}

impl MockDelegationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, zone: &str, nameservers: &[&str]) -> Self {
        self.insert(zone, nameservers.iter().collect());
        self
    }

    pub fn contains(&self, zone: &str) -> bool {
        self.entries.read().unwrap().contains_key(&fqdn(zone))
    }
}

impl DelegationCachePort for MockDelegationCache {
    fn get(&self, zone: &str) -> Option<NameserverSet> {
        self.entries.read().unwrap().get(&fqdn(zone)).cloned()
    }

    fn insert(&self, zone: &str, nameservers: NameserverSet) {
        self.entries.write().unwrap().insert(fqdn(zone), nameservers);
    }

    fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }
}

/// Non-authoritative referral carrying `delegated` in the authority section.
pub fn referral(zone: &str, delegated: &[&str]) -> NameserverResponse {
    NameserverResponse {
        authoritative: false,
        truncated: false,
        answers: Vec::new(),
        authorities: delegated
            .iter()
            .map(|ns| ResponseRecord::ns(&fqdn(zone), &fqdn(ns)))
            .collect(),
    }
}

pub fn authoritative_answer(name: &str, record_type: RecordType) -> NameserverResponse {
    NameserverResponse {
        authoritative: true,
        truncated: false,
        answers: vec![ResponseRecord::other(&fqdn(name), record_type.to_u16())],
        authorities: Vec::new(),
    }
}

pub fn non_authoritative_answer(name: &str, record_type: RecordType) -> NameserverResponse {
    NameserverResponse {
        authoritative: false,
        ..authoritative_answer(name, record_type)
    }
}
