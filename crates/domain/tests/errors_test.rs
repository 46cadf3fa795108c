use lame_delegation_domain::{DelegationError, DomainError};

#[test]
fn test_delegation_error_messages() {
    let cases = vec![
        (
            DelegationError::NoNameServersFound {
                name: "example.com.".to_string(),
            },
            "no name servers found [example.com.]",
        ),
        (
            DelegationError::NoNameServerResponse {
                server: "a.gtld-servers.net.:53".to_string(),
                reason: "timed out".to_string(),
            },
            "name server [a.gtld-servers.net.:53] failed to respond: timed out",
        ),
        (
            DelegationError::MinNameServerRequirementFailed { found: 1 },
            "at least two name servers are needed - found [1]",
        ),
        (
            DelegationError::IncorrectDelegations { counts: vec![3, 4] },
            "delegations from name servers do not match - found [3, 4]",
        ),
        (
            DelegationError::NameserverResponseNotAuthoritative {
                server: "ns1.example.com.:53".to_string(),
            },
            "name server [ns1.example.com.:53] response not authoritative",
        ),
    ];

    for (error, expected) in cases {
        assert_eq!(error.to_string(), expected);
    }
}

#[test]
fn test_kind_tags() {
    assert_eq!(
        DelegationError::IncorrectDelegations { counts: vec![] }.kind(),
        "IncorrectDelegations"
    );
    assert_eq!(
        DelegationError::MinNameServerRequirementFailed { found: 0 }.kind(),
        "MinNameServerRequirementFailed"
    );
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: DomainError = io.into();
    assert!(matches!(err, DomainError::IoError(_)));
}
