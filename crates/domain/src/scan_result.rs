use crate::DelegationError;
use std::sync::Arc;

pub const RESULT_HEADER: [&str; 3] = ["Hostname", "ContainsLameDelegation", "Error"];

/// Verdict for one hostname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub hostname: Arc<str>,
    pub contains_lame_delegation: bool,
    pub error: Option<DelegationError>,
}

impl ScanResult {
    pub fn new(hostname: impl Into<Arc<str>>) -> Self {
        Self {
            hostname: hostname.into(),
            contains_lame_delegation: false,
            error: None,
        }
    }

    /// Records a finding and marks the hostname lame. The flag is never
    /// cleared afterwards; the error is overwritten by later findings.
    pub fn record_lame(&mut self, error: DelegationError) {
        self.contains_lame_delegation = true;
        self.error = Some(error);
    }

    pub fn header() -> [&'static str; 3] {
        RESULT_HEADER
    }

    pub fn to_row(&self) -> [String; 3] {
        [
            self.hostname.to_string(),
            self.contains_lame_delegation.to_string(),
            self.error.as_ref().map(|e| e.to_string()).unwrap_or_default(),
        ]
    }
}
