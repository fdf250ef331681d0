use arc_swap::ArcSwap;
use async_trait::async_trait;
use ferrous_lookup_application::ports::DnsClient;
use ferrous_lookup_domain::config::DnsConfig;
use ferrous_lookup_domain::{DomainError, QueryType, RawDnsError, ResolverPayload};
use hickory_proto::rr::Name;
use hickory_resolver::config::{
    NameServerConfig, NameServerConfigGroup, Protocol, ResolverConfig, ResolverOpts,
};
use hickory_resolver::TokioAsyncResolver;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use super::error_map::map_resolve_error;
use super::record_type_map::QueryTypeMapper;
use super::response_parser::ResponseParser;

struct ActiveResolver {
    resolver: TokioAsyncResolver,
    servers: Vec<SocketAddr>,
}

/// [`DnsClient`] backed by hickory's async resolver.
///
/// The resolver is rebuilt on reconfiguration and swapped in atomically;
/// queries already in flight finish against the previous one.
pub struct HickoryDnsClient {
    active: ArcSwap<ActiveResolver>,
    defaults: Vec<SocketAddr>,
    options: ResolverOpts,
}

impl HickoryDnsClient {
    pub fn new(config: &DnsConfig) -> Result<Self, DomainError> {
        let defaults = config.upstream_addresses()?;
        if defaults.is_empty() {
            return Err(DomainError::ResolverUnavailable(
                "no upstream servers configured".to_string(),
            ));
        }

        let options = resolver_options(config);
        let active = build_resolver(&defaults, &options);

        info!(
            servers = ?defaults,
            timeout_ms = config.query_timeout,
            attempts = config.attempts,
            "DNS client initialized"
        );

        Ok(Self {
            active: ArcSwap::from_pointee(active),
            defaults,
            options,
        })
    }
}

#[async_trait]
impl DnsClient for HickoryDnsClient {
    async fn forward_query(
        &self,
        name: &str,
        query_type: QueryType,
    ) -> Result<ResolverPayload, RawDnsError> {
        let active = self.active.load_full();
        let record_type = QueryTypeMapper::to_hickory(query_type);

        debug!(name, query_type = %query_type, "Forward query");

        let lookup = active
            .resolver
            .lookup(name, record_type)
            .await
            .map_err(|e| map_resolve_error(&e, query_type, name))?;

        Ok(ResponseParser::parse(query_type, lookup.record_iter()))
    }

    async fn reverse_query(&self, ip: IpAddr) -> Result<Vec<String>, RawDnsError> {
        let active = self.active.load_full();
        let subject = ip.to_string();

        debug!(ip = %ip, "Reverse query");

        let lookup = active
            .resolver
            .lookup(Name::from(ip), QueryTypeMapper::to_hickory(QueryType::PTR))
            .await
            .map_err(|e| map_resolve_error(&e, QueryType::PTR, &subject))?;

        let hostnames = ResponseParser::parse(QueryType::PTR, lookup.record_iter())
            .into_records()
            .into_iter()
            .map(|record| record.primary_value())
            .collect();

        Ok(hostnames)
    }

    fn reconfigure(&self, servers: &[SocketAddr]) -> Result<(), DomainError> {
        let servers = if servers.is_empty() {
            self.defaults.as_slice()
        } else {
            servers
        };

        self.active
            .store(Arc::new(build_resolver(servers, &self.options)));

        debug!(servers = ?servers, "Resolver rebuilt");
        Ok(())
    }

    fn servers(&self) -> Vec<String> {
        self.active
            .load()
            .servers
            .iter()
            .map(SocketAddr::to_string)
            .collect()
    }
}

fn resolver_options(config: &DnsConfig) -> ResolverOpts {
    let mut options = ResolverOpts::default();
    options.timeout = Duration::from_millis(config.query_timeout);
    options.attempts = config.attempts;
    options.use_hosts_file = false;
    // Every lookup asks the server; retries must never see a stale answer.
    options.cache_size = 0;
    options
}

fn build_resolver(servers: &[SocketAddr], options: &ResolverOpts) -> ActiveResolver {
    let mut group = NameServerConfigGroup::with_capacity(servers.len() * 2);
    for &server in servers {
        for protocol in [Protocol::Udp, Protocol::Tcp] {
            let mut name_server = NameServerConfig::new(server, protocol);
            // NXDOMAIN and NODATA are final; other servers are not asked.
            name_server.trust_negative_responses = true;
            group.push(name_server);
        }
    }

    let config = ResolverConfig::from_parts(None, Vec::new(), group);

    ActiveResolver {
        resolver: TokioAsyncResolver::tokio(config, options.clone()),
        servers: servers.to_vec(),
    }
}

