pub mod delegation_cache;

pub use delegation_cache::DelegationCache;
