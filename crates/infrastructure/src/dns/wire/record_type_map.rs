//! Conversion between `lame_delegation_domain::RecordType` and
//! `hickory_proto::rr::RecordType`.
//!
//! Both sides agree on the IANA type code, so the mapping goes through it.

use hickory_proto::rr::RecordType as HickoryRecordType;
use lame_delegation_domain::RecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        HickoryRecordType::from(record_type.to_u16())
    }
}
