use ferrous_lookup_domain::config::parse_server_address;
use ferrous_lookup_domain::{
    DnsRecordData, DomainError, QueryType, RawDnsError, ResolverPayload,
};
use std::net::IpAddr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use crate::ports::DnsClient;

/// Uniform query surface over a [`DnsClient`].
///
/// Owns the last server value it applied, so repeated batches against the
/// same server never reconfigure the client again.
pub struct ResolverAdapter {
    client: Arc<dyn DnsClient>,
    applied_server: Mutex<Option<String>>,
}

impl ResolverAdapter {
    pub fn new(client: Arc<dyn DnsClient>) -> Self {
        Self {
            client,
            applied_server: Mutex::new(None),
        }
    }

    /// Points the client at `server` (empty for the configured defaults).
    ///
    /// Returns `true` when the client was reconfigured, `false` when `server`
    /// was already in effect.
    #[instrument(skip(self))]
    pub async fn set_server(&self, server: &str) -> Result<bool, DomainError> {
        let server = server.trim();
        let mut applied = self.applied_server.lock().await;

        if applied.as_deref() == Some(server) {
            debug!("DNS server unchanged, skipping reconfiguration");
            return Ok(false);
        }

        let servers = if server.is_empty() {
            Vec::new()
        } else {
            vec![parse_server_address(server)?]
        };

        self.client.reconfigure(&servers)?;
        *applied = Some(server.to_string());

        info!(servers = ?self.client.servers(), "DNS servers configured");
        Ok(true)
    }

    pub fn servers(&self) -> Vec<String> {
        self.client.servers()
    }

    pub async fn forward_query(
        &self,
        name: &str,
        query_type: QueryType,
    ) -> Result<ResolverPayload, RawDnsError> {
        self.client.forward_query(name, query_type).await
    }

    pub async fn reverse_query(&self, ip: IpAddr) -> Result<ResolverPayload, RawDnsError> {
        let hostnames = self.client.reverse_query(ip).await?;
        Ok(ResolverPayload::Many(
            hostnames.into_iter().map(DnsRecordData::Text).collect(),
        ))
    }
}
