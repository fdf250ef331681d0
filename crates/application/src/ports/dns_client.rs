use async_trait::async_trait;
use ferrous_lookup_domain::{DomainError, QueryType, RawDnsError, ResolverPayload};
use std::net::{IpAddr, SocketAddr};

/// The DNS protocol client the lookups run against.
#[async_trait]
pub trait DnsClient: Send + Sync {
    /// Forward query for one record kind. `A`/`AAAA` answers carry TTLs.
    async fn forward_query(
        &self,
        name: &str,
        query_type: QueryType,
    ) -> Result<ResolverPayload, RawDnsError>;

    /// Reverse (PTR) lookup returning host names.
    async fn reverse_query(&self, ip: IpAddr) -> Result<Vec<String>, RawDnsError>;

    /// Replaces the server list for every subsequent query.
    /// An empty list restores the configured defaults.
    fn reconfigure(&self, servers: &[SocketAddr]) -> Result<(), DomainError>;

    fn servers(&self) -> Vec<String>;
}
