#![allow(dead_code)]

mod mock_dns_client;

pub use mock_dns_client::MockDnsClient;

use ferrous_lookup_application::services::ResolverAdapter;
use ferrous_lookup_application::use_cases::RunLookupUseCase;
use ferrous_lookup_domain::{DnsRecordData, Subject};
use std::sync::Arc;

pub fn a_record(address: &str) -> DnsRecordData {
    DnsRecordData::address(address.parse().unwrap(), 300)
}

pub fn subjects(values: &[&str]) -> Vec<Subject> {
    values.iter().map(|v| Subject::parse(v).unwrap()).collect()
}

pub fn make_lookup(client: &MockDnsClient) -> RunLookupUseCase {
    let adapter = ResolverAdapter::new(Arc::new(client.clone()));
    RunLookupUseCase::new(Arc::new(adapter))
}
