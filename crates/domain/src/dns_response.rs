use std::sync::Arc;

use crate::RecordType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    /// Target host of an NS record.
    Ns(Arc<str>),
    Soa,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseRecord {
    pub name: Arc<str>,
    /// Raw wire code, kept even for types the crate has no variant for.
    pub record_type: u16,
    pub data: RecordData,
}

impl ResponseRecord {
    pub fn ns(name: &str, nameserver: &str) -> Self {
        Self {
            name: Arc::from(name),
            record_type: RecordType::NS.to_u16(),
            data: RecordData::Ns(Arc::from(nameserver)),
        }
    }

    pub fn soa(name: &str) -> Self {
        Self {
            name: Arc::from(name),
            record_type: RecordType::SOA.to_u16(),
            data: RecordData::Soa,
        }
    }

    pub fn other(name: &str, record_type: u16) -> Self {
        Self {
            name: Arc::from(name),
            record_type,
            data: RecordData::Other,
        }
    }

    pub fn nameserver(&self) -> Option<&Arc<str>> {
        match &self.data {
            RecordData::Ns(host) => Some(host),
            _ => None,
        }
    }

    pub fn is_soa(&self) -> bool {
        matches!(self.data, RecordData::Soa)
    }
}

/// The parts of a DNS reply the delegation checks look at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameserverResponse {
    pub authoritative: bool,
    pub truncated: bool,
    pub answers: Vec<ResponseRecord>,
    pub authorities: Vec<ResponseRecord>,
}

impl NameserverResponse {
    /// True when the answer or authority section carries a record of
    /// `record_type`.
    pub fn contains_type(&self, record_type: RecordType) -> bool {
        let code = record_type.to_u16();
        self.authorities
            .iter()
            .chain(self.answers.iter())
            .any(|r| r.record_type == code)
    }
}
