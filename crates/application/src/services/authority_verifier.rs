use futures::future::join_all;
use lame_delegation_domain::{DelegationError, NameserverSet, RecordType};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::ports::{server_label, NameserverQueryPort};

#[derive(Debug, Clone, Default)]
pub struct VerificationReport {
    pub lame: bool,
    pub errors: Vec<DelegationError>,
}

/// Confirms the final nameservers answer the real question authoritatively.
pub struct AuthorityVerifier {
    client: Arc<dyn NameserverQueryPort>,
    timeout: Duration,
}

impl AuthorityVerifier {
    pub fn new(client: Arc<dyn NameserverQueryPort>, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    #[instrument(skip(self, nameservers), level = "debug")]
    pub async fn verify(
        &self,
        domain: &str,
        record_type: RecordType,
        nameservers: &NameserverSet,
    ) -> VerificationReport {
        let exchanges = nameservers.iter().map(|nameserver| async move {
            debug!(
                nameserver = %nameserver,
                domain = %domain,
                record_type = %record_type,
                "Asking for final answer"
            );
            let reply = self
                .client
                .query(nameserver, domain, record_type, self.timeout)
                .await;
            (nameserver, reply)
        });

        let mut report = VerificationReport::default();

        for (nameserver, reply) in join_all(exchanges).await {
            let error = match reply {
                Err(e) => DelegationError::NoNameServerResponse {
                    server: server_label(nameserver),
                    reason: e.to_string(),
                },
                Ok(response) if !response.authoritative => {
                    DelegationError::NameserverResponseNotAuthoritative {
                        server: server_label(nameserver),
                    }
                }
                Ok(response) => {
                    debug!(
                        nameserver = %nameserver,
                        answers = response.answers.len(),
                        "Authoritative answer"
                    );
                    continue;
                }
            };

            warn!(domain = %domain, error = %error, "Lame nameserver");
            report.lame = true;
            report.errors.push(error);
        }

        report
    }
}
