use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Lifetime of a cached delegation, in seconds.
    #[serde(default = "default_ttl")]
    pub ttl: u64,

    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl CacheConfig {
    pub fn ttl_duration(&self) -> Duration {
        Duration::from_secs(self.ttl)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: default_ttl(),
            max_entries: default_max_entries(),
        }
    }
}

fn default_ttl() -> u64 {
    300
}

fn default_max_entries() -> usize {
    100_000
}
