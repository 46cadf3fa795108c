pub mod cache;
pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;
pub mod scan;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
pub use scan::ScanConfig;
