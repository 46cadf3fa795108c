pub mod resolve_domain;
pub mod scan_domains;

pub use resolve_domain::ResolveDomainUseCase;
pub use scan_domains::ScanDomainsUseCase;
