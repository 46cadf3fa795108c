use thiserror::Error;

/// Per-domain findings recorded on a [`crate::ScanResult`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DelegationError {
    /// `name` is the zone that had no nameservers, or the server whose
    /// reply carried no NS records.
    #[error("no name servers found [{name}]")]
    NoNameServersFound { name: String },

    #[error("name server [{server}] failed to respond: {reason}")]
    NoNameServerResponse { server: String, reason: String },

    #[error("at least two name servers are needed - found [{found}]")]
    MinNameServerRequirementFailed { found: usize },

    #[error("delegations from name servers do not match - found [{}]", join_counts(.counts))]
    IncorrectDelegations { counts: Vec<usize> },

    #[error("name server [{server}] response not authoritative")]
    NameserverResponseNotAuthoritative { server: String },
}

impl DelegationError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoNameServersFound { .. } => "NoNameServersFound",
            Self::NoNameServerResponse { .. } => "NoNameServerResponse",
            Self::MinNameServerRequirementFailed { .. } => "MinNameServerRequirementFailed",
            Self::IncorrectDelegations { .. } => "IncorrectDelegations",
            Self::NameserverResponseNotAuthoritative { .. } => {
                "NameserverResponseNotAuthoritative"
            }
        }
    }
}

fn join_counts(counts: &[usize]) -> String {
    counts
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("Transport error talking to {server}: {reason}")]
    TransportIo { server: String, reason: String },

    #[error("No nameserver address found for {0}")]
    UnresolvableNameserver(String),

    #[error("Scan incomplete: expected {expected} results, received {received}")]
    ScanIncomplete { expected: usize, received: usize },
}

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::IoError(e.to_string())
    }
}
