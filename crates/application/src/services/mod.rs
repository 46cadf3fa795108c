mod authority_verifier;
mod delegation_validator;
mod nameserver_directory;

pub use authority_verifier::{AuthorityVerifier, VerificationReport};
pub use delegation_validator::{
    compare_delegations, find_delegations, Delegation, DelegationValidator, HopOutcome,
};
pub use nameserver_directory::NameserverDirectory;
