pub mod cache;
pub mod dns;
pub mod report;
pub mod system;
