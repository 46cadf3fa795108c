use lame_delegation_domain::RecordType;
use std::str::FromStr;

#[test]
fn test_parse_known_names() {
    assert_eq!(RecordType::from_str("A").unwrap(), RecordType::A);
    assert_eq!(RecordType::from_str("AAAA").unwrap(), RecordType::AAAA);
    assert_eq!(RecordType::from_str("NS").unwrap(), RecordType::NS);
    assert_eq!(RecordType::from_str("caa").unwrap(), RecordType::CAA);
}

#[test]
fn test_parse_unknown_name_fails() {
    assert!(RecordType::from_str("BOGUS").is_err());
}

#[test]
fn test_unknown_name_defaults_to_a() {
    assert_eq!(RecordType::from_name_or_default("BOGUS"), RecordType::A);
    assert_eq!(RecordType::from_name_or_default(""), RecordType::A);
}

#[test]
fn test_name_lookup_is_case_insensitive() {
    assert_eq!(RecordType::from_name_or_default("mx"), RecordType::MX);
    assert_eq!(RecordType::from_name_or_default("Txt"), RecordType::TXT);
}

#[test]
fn test_wire_codes() {
    assert_eq!(RecordType::A.to_u16(), 1);
    assert_eq!(RecordType::NS.to_u16(), 2);
    assert_eq!(RecordType::SOA.to_u16(), 6);
    assert_eq!(RecordType::AAAA.to_u16(), 28);
    assert_eq!(RecordType::CAA.to_u16(), 257);
    assert_eq!(RecordType::from_u16(15), Some(RecordType::MX));
}

#[test]
fn test_display() {
    assert_eq!(RecordType::HTTPS.to_string(), "HTTPS");
    assert_eq!(RecordType::default(), RecordType::A);
}
