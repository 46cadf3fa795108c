use futures::future::join_all;
use lame_delegation_domain::{
    DelegationError, NameserverResponse, NameserverSet, RecordType,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::ports::{server_label, NameserverQueryPort};

/// What one parent nameserver said about a child zone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Delegation {
    pub nameservers: NameserverSet,
    /// The server answered for the child itself instead of referring.
    pub is_answer: bool,
}

/// Result of validating one `(parent, child)` hop.
#[derive(Debug, Clone, Default)]
pub struct HopOutcome {
    pub child_nameservers: Option<NameserverSet>,
    /// Per-server failures. They mark the domain lame but do not by
    /// themselves make the hop inconsistent.
    pub server_errors: Vec<DelegationError>,
    pub failure: Option<DelegationError>,
}

impl HopOutcome {
    pub fn is_consistent(&self) -> bool {
        self.failure.is_none()
    }
}

/// Extracts the delegated nameservers from a reply to an NS question.
///
/// Referrals carry the delegation in the authority section. When that
/// section is empty the answer section is used instead and the reply counts
/// as a direct answer; an SOA in the chosen section means the same.
pub fn find_delegations(response: &NameserverResponse) -> Delegation {
    let (section, mut is_answer) = if !response.authorities.is_empty() {
        (&response.authorities, false)
    } else if !response.answers.is_empty() {
        (&response.answers, true)
    } else {
        return Delegation::default();
    };

    let mut nameservers = NameserverSet::new();
    for record in section {
        if let Some(host) = record.nameserver() {
            nameservers.insert(host);
        } else if record.is_soa() {
            is_answer = true;
        }
    }

    Delegation {
        nameservers,
        is_answer,
    }
}

/// Checks that every parent nameserver delegated the same number of names.
///
/// Only the cardinality of each delegation is compared, not its members.
/// On success the union of every name seen is returned.
pub fn compare_delegations<K>(
    delegations: &BTreeMap<K, Delegation>,
) -> Result<NameserverSet, DelegationError> {
    let mut tally: BTreeMap<usize, usize> = BTreeMap::new();
    let mut union = NameserverSet::new();

    for delegation in delegations.values() {
        *tally.entry(delegation.nameservers.len()).or_default() += 1;
        union.extend_from(&delegation.nameservers);
    }

    if let Some((&found, _)) = tally.iter().next() {
        if found < 2 {
            return Err(DelegationError::MinNameServerRequirementFailed { found });
        }
    }

    for (count, servers) in &tally {
        debug!(
            delegated = count,
            parent_servers = servers,
            "Delegated nameserver count"
        );
    }

    if tally.len() == 1 {
        Ok(union)
    } else {
        Err(DelegationError::IncorrectDelegations {
            counts: tally.keys().copied().collect(),
        })
    }
}

pub struct DelegationValidator {
    client: Arc<dyn NameserverQueryPort>,
    timeout: Duration,
}

impl DelegationValidator {
    pub fn new(client: Arc<dyn NameserverQueryPort>, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Asks every nameserver of `parent_zone` for the NS records of
    /// `child_zone` and judges whether they agree.
    #[instrument(skip(self, parent_nameservers), level = "debug")]
    pub async fn validate(
        &self,
        parent_zone: &str,
        parent_nameservers: &NameserverSet,
        child_zone: &str,
    ) -> HopOutcome {
        let exchanges = parent_nameservers.iter().map(|nameserver| async move {
            debug!(
                nameserver = %nameserver,
                child = %child_zone,
                "Asking for NS records"
            );
            let reply = self
                .client
                .query(nameserver, child_zone, RecordType::NS, self.timeout)
                .await;
            (nameserver, reply)
        });
        let replies = join_all(exchanges).await;

        let mut outcome = HopOutcome::default();
        let mut delegations: BTreeMap<Arc<str>, Delegation> = BTreeMap::new();
        let mut answered_directly = false;

        for (nameserver, reply) in replies {
            match reply {
                Err(e) => {
                    debug!(
                        nameserver = %nameserver,
                        error = %e,
                        "No response from parent nameserver"
                    );
                    outcome
                        .server_errors
                        .push(DelegationError::NoNameServerResponse {
                            server: server_label(nameserver),
                            reason: e.to_string(),
                        });
                }
                Ok(response) if !response.contains_type(RecordType::NS) => {
                    debug!(nameserver = %nameserver, "Reply carried no NS records");
                    outcome.server_errors.push(DelegationError::NoNameServersFound {
                        name: server_label(nameserver),
                    });
                }
                Ok(response) => {
                    let delegation = find_delegations(&response);
                    debug!(
                        nameserver = %nameserver,
                        delegated = %delegation.nameservers,
                        is_answer = delegation.is_answer,
                        "Delegation received"
                    );
                    answered_directly |= delegation.is_answer;
                    delegations.insert(Arc::clone(nameserver), delegation);
                }
            }
        }

        match compare_delegations(&delegations) {
            Ok(child_nameservers) => {
                outcome.child_nameservers = Some(child_nameservers);
            }
            Err(failure) if answered_directly => {
                // Parent and child are served by the same nameservers.
                debug!(
                    parent = %parent_zone,
                    child = %child_zone,
                    error = %failure,
                    "Parent answered directly, using its nameservers for the child"
                );
                outcome.child_nameservers = Some(parent_nameservers.clone());
            }
            Err(failure) => {
                outcome.failure = Some(failure);
            }
        }

        debug!(
            parent = %parent_zone,
            child = %child_zone,
            consistent = outcome.is_consistent(),
            "Hop validated"
        );

        outcome
    }
}
