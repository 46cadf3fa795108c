use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::zone_chain::fqdn;

/// Hostnames of the nameservers authoritative for a zone.
///
/// Names are stored fully qualified and kept sorted so that iteration order,
/// and therefore the order in which servers are queried and errors are
/// reported, is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameserverSet {
    names: BTreeSet<Arc<str>>,
}

impl NameserverSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str) -> bool {
        self.names.insert(Arc::from(fqdn(name)))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(fqdn(name).as_str())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<str>> {
        self.names.iter()
    }

    pub fn extend_from(&mut self, other: &NameserverSet) {
        self.names.extend(other.names.iter().cloned());
    }
}

impl<S: AsRef<str>> FromIterator<S> for NameserverSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = NameserverSet::new();
        for name in iter {
            set.insert(name.as_ref());
        }
        set
    }
}

impl fmt::Display for NameserverSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.names.iter().map(|n| n.as_ref()).collect();
        write!(f, "[{}]", names.join(", "))
    }
}
