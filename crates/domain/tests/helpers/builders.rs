#![allow(dead_code)]
use lame_delegation_domain::{DelegationError, ScanResult};

pub struct ScanResultBuilder {
    hostname: String,
    lame: bool,
    error: Option<DelegationError>,
}

impl ScanResultBuilder {
    pub fn new() -> Self {
        Self {
            hostname: "example.com".to_string(),
            lame: false,
            error: None,
        }
    }

    pub fn hostname(mut self, hostname: &str) -> Self {
        self.hostname = hostname.to_string();
        self
    }

    pub fn lame(mut self, error: DelegationError) -> Self {
        self.lame = true;
        self.error = Some(error);
        self
    }

    pub fn build(self) -> ScanResult {
        let mut result = ScanResult::new(self.hostname.as_str());
        if let Some(error) = self.error {
            result.record_lame(error);
        }
        result.contains_lame_delegation = self.lame;
        result
    }
}

impl Default for ScanResultBuilder {
    fn default() -> Self {
        Self::new()
    }
}
