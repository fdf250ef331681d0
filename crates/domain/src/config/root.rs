use serde::{Deserialize, Serialize};
use std::path::Path;

use super::dns::{parse_server_address, DnsConfig};
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::lookup::{LookupOptions, ResultsToShow};
use crate::dns_record::QueryType;

const LOCAL_CONFIG_PATH: &str = "ferrous-lookup.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-lookup/config.toml";

/// Main configuration structure for Ferrous Lookup
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Resolver settings
    #[serde(default)]
    pub dns: DnsConfig,

    /// Default options for lookup batches
    #[serde(default)]
    pub lookup: LookupOptions,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-lookup.toml in current directory
    /// 3. /etc/ferrous-lookup/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(server) = overrides.dns_server {
            self.lookup.dns_server = server;
        }
        if let Some(query_types) = overrides.query_types {
            self.lookup.query_types = query_types;
        }
        if overrides.private_ip_only {
            self.lookup.private_ip_only = true;
        }
        if overrides.answer_only {
            self.lookup.results_to_show = ResultsToShow::AnswerOnly;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dns.upstream_servers.is_empty() {
            return Err(ConfigError::Validation(
                "No upstream servers configured".to_string(),
            ));
        }

        for server in &self.dns.upstream_servers {
            parse_server_address(server).map_err(|e| ConfigError::Validation(e.to_string()))?;
        }

        if !self.lookup.dns_server.trim().is_empty() {
            parse_server_address(&self.lookup.dns_server)
                .map_err(|e| ConfigError::Validation(e.to_string()))?;
        }

        if self.dns.attempts == 0 {
            return Err(ConfigError::Validation(
                "dns.attempts must be at least 1".to_string(),
            ));
        }

        if self.lookup.subject_concurrency == 0 || self.lookup.query_concurrency == 0 {
            return Err(ConfigError::Validation(
                "Lookup concurrency limits must be at least 1".to_string(),
            ));
        }

        if self.lookup.query_types.contains(&QueryType::PTR) {
            return Err(ConfigError::Validation(
                "PTR is queried automatically for IP subjects and cannot be listed in query_types"
                    .to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_server: Option<String>,
    pub query_types: Option<Vec<QueryType>>,
    pub private_ip_only: bool,
    pub answer_only: bool,
    pub log_level: Option<String>,
}
