use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;
use super::scan::ScanConfig;

const LOCAL_CONFIG_PATH: &str = "lame-delegation.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/lame-delegation/config.toml";

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Nameserver lookup and query timeouts
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Delegation cache
    #[serde(default)]
    pub cache: CacheConfig,

    /// Worker pool and report output
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. lame-delegation.toml in current directory
    /// 3. /etc/lame-delegation/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(dir) = overrides.output_dir {
            self.scan.output_dir = dir;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(timeout) = overrides.query_timeout {
            self.resolver.query_timeout = timeout;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.query_timeout == 0 {
            return Err(ConfigError::Validation(
                "resolver.query_timeout must be greater than 0".to_string(),
            ));
        }

        if self.resolver.lookup_timeout == 0 {
            return Err(ConfigError::Validation(
                "resolver.lookup_timeout must be greater than 0".to_string(),
            ));
        }

        if self.cache.ttl == 0 {
            return Err(ConfigError::Validation(
                "cache.ttl must be greater than 0".to_string(),
            ));
        }

        if self.scan.workers_per_cpu == 0 {
            return Err(ConfigError::Validation(
                "scan.workers_per_cpu must be greater than 0".to_string(),
            ));
        }

        if self.scan.progress_interval == 0 {
            return Err(ConfigError::Validation(
                "scan.progress_interval must be greater than 0".to_string(),
            ));
        }

        for resolver in &self.resolver.system_resolvers {
            if resolver.parse::<SocketAddr>().is_err() {
                return Err(ConfigError::Validation(format!(
                    "Invalid system resolver '{}': expected ip:port",
                    resolver
                )));
            }
        }

        Ok(())
    }

    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub output_dir: Option<String>,
    pub log_level: Option<String>,
    pub query_timeout: Option<u64>,
}
