use serde::Serialize;

use super::DnsRecordData;
use crate::dns_error::DnsError;

/// Outcome of one query type within a subject's lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordResult {
    pub results: Vec<DnsRecordData>,
    pub error: Option<DnsError>,
    /// Set once the query has completed, successfully or not.
    pub searched: bool,
    pub elapsed_time_ms: Option<u64>,
}

impl RecordResult {
    pub fn pending() -> Self {
        Self::default()
    }

    /// Reverse lookups always run, so their slot starts out searched.
    pub fn presearched() -> Self {
        Self {
            searched: true,
            ..Self::default()
        }
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }
}
