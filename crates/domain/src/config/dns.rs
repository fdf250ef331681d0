use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

use crate::errors::DomainError;

pub const DEFAULT_DNS_PORT: u16 = 53;

/// Resolver settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Servers used when a lookup does not name one (e.g. "8.8.8.8:53")
    #[serde(default = "default_upstream_servers")]
    pub upstream_servers: Vec<String>,

    /// Per-query timeout in milliseconds
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    /// Attempts per query before the resolver gives up
    #[serde(default = "default_attempts")]
    pub attempts: usize,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            upstream_servers: default_upstream_servers(),
            query_timeout: default_query_timeout(),
            attempts: default_attempts(),
        }
    }
}

impl DnsConfig {
    pub fn upstream_addresses(&self) -> Result<Vec<SocketAddr>, DomainError> {
        self.upstream_servers
            .iter()
            .map(|server| parse_server_address(server))
            .collect()
    }
}

fn default_upstream_servers() -> Vec<String> {
    vec!["8.8.8.8:53".to_string(), "1.1.1.1:53".to_string()]
}

fn default_query_timeout() -> u64 {
    5000
}

fn default_attempts() -> usize {
    2
}

/// Parses a server given as `ip`, `ip:port`, `[v6]:port` or a bare IPv6
/// address. The port defaults to 53.
pub fn parse_server_address(server: &str) -> Result<SocketAddr, DomainError> {
    let trimmed = server.trim();

    if let Ok(addr) = trimmed.parse::<SocketAddr>() {
        return Ok(addr);
    }

    let bare = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(trimmed);

    bare.parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, DEFAULT_DNS_PORT))
        .map_err(|_| DomainError::InvalidServerAddress(server.to_string()))
}
