#![allow(dead_code)]
use ferrous_lookup_domain::{DnsError, DnsRecordData, RawDnsError, ResolverPayload};
use std::net::IpAddr;

pub fn address(ip: &str, ttl: u32) -> DnsRecordData {
    DnsRecordData::address(ip.parse::<IpAddr>().unwrap(), ttl)
}

pub fn addresses(ips: &[&str]) -> ResolverPayload {
    ResolverPayload::Many(ips.iter().map(|ip| address(ip, 300)).collect())
}

pub fn mx_records(exchanges: &[(&str, u16)]) -> ResolverPayload {
    ResolverPayload::Many(
        exchanges
            .iter()
            .map(|(exchange, priority)| DnsRecordData::mx(*exchange, *priority))
            .collect(),
    )
}

pub fn dns_error(code: &str, syscall: &str) -> DnsError {
    DnsError::classify(RawDnsError::new(code, syscall, format!("{syscall} {code}")))
}
