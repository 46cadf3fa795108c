#![allow(dead_code)]

mod dns_server_mock;
mod wire;

pub use dns_server_mock::MockDnsServer;
pub use wire::ReplyBuilder;
