use super::RecordType;
use std::sync::Arc;

/// One hostname to check, paired with the record type used for the final
/// authority check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub hostname: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(hostname: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            hostname: hostname.into(),
            record_type,
        }
    }
}
