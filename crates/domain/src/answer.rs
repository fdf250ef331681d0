use serde::Serialize;

use crate::dns_error::DnsError;
use crate::dns_record::{QueryType, RecordResult, ResolverPayload};
use crate::subject::Subject;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerEntry {
    #[serde(rename = "type")]
    pub query_type: QueryType,
    #[serde(flatten)]
    pub record: RecordResult,
}

/// Per-subject record set.
///
/// Entries are kept in display order, so the order is always a permutation of
/// the query types present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Answer {
    entries: Vec<AnswerEntry>,
}

impl Answer {
    /// IP subjects get a single pre-searched `PTR` slot; domain subjects get
    /// one pending slot for each of the seven forward kinds.
    pub fn blank(subject: &Subject) -> Self {
        let entries = if subject.is_ip() {
            vec![AnswerEntry {
                query_type: QueryType::PTR,
                record: RecordResult::presearched(),
            }]
        } else {
            QueryType::DOMAIN_TYPES
                .iter()
                .map(|&query_type| AnswerEntry {
                    query_type,
                    record: RecordResult::pending(),
                })
                .collect()
        };

        Self { entries }
    }

    pub fn entries(&self) -> &[AnswerEntry] {
        &self.entries
    }

    pub fn order(&self) -> Vec<QueryType> {
        self.entries.iter().map(|entry| entry.query_type).collect()
    }

    pub fn get(&self, query_type: QueryType) -> Option<&RecordResult> {
        self.entries
            .iter()
            .find(|entry| entry.query_type == query_type)
            .map(|entry| &entry.record)
    }

    pub fn get_mut(&mut self, query_type: QueryType) -> Option<&mut RecordResult> {
        self.entries
            .iter_mut()
            .find(|entry| entry.query_type == query_type)
            .map(|entry| &mut entry.record)
    }

    pub fn into_record(self, query_type: QueryType) -> Option<RecordResult> {
        self.entries
            .into_iter()
            .find(|entry| entry.query_type == query_type)
            .map(|entry| entry.record)
    }

    /// Writes the outcome of one query and marks it searched.
    ///
    /// Returns the number of answers added, which is zero on failure.
    pub fn record_completion(
        &mut self,
        query_type: QueryType,
        outcome: Result<ResolverPayload, DnsError>,
        elapsed_time_ms: u64,
    ) -> usize {
        let record = self.slot(query_type);
        record.elapsed_time_ms = Some(elapsed_time_ms);
        record.searched = true;

        match outcome {
            Ok(payload) => {
                record.results = payload.into_records();
                record.error = None;
                record.results.len()
            }
            Err(error) => {
                record.error = Some(error);
                0
            }
        }
    }

    pub fn total_answers(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.record.result_count())
            .sum()
    }

    pub fn is_domain_not_found(&self) -> bool {
        self.errors().any(DnsError::is_domain_not_found)
    }

    pub fn is_reverse_not_found(&self) -> bool {
        self.errors().any(DnsError::is_reverse_not_found)
    }

    /// Display order: most results first, then searched before unsearched.
    /// Ties keep their current relative order.
    pub fn sort(&mut self) {
        self.entries.sort_by(|a, b| {
            b.record
                .result_count()
                .cmp(&a.record.result_count())
                .then_with(|| b.record.searched.cmp(&a.record.searched))
        });
    }

    /// Compact summary for one subject.
    ///
    /// An `A` answer is always preferred as the headline, even when another
    /// kind returned more records.
    pub fn summary_tags(
        &self,
        domain_not_found: bool,
        reverse_not_found: bool,
        total_answers: usize,
    ) -> Vec<String> {
        if domain_not_found {
            return vec!["Domain not found".to_string()];
        }
        if reverse_not_found {
            return vec!["IP not found".to_string()];
        }

        let first_address = self
            .get(QueryType::A)
            .and_then(|record| record.results.first());

        let headline = match first_address {
            Some(record) => Some(format!("A {}", record.primary_value())),
            None if total_answers > 0 => self
                .entries
                .iter()
                .find_map(|entry| {
                    entry.record.results.first().map(|record| {
                        format!("{} {}", entry.query_type, record.primary_value())
                    })
                }),
            None => None,
        };

        let Some(headline) = headline else {
            return vec!["No Answers".to_string()];
        };

        let mut tags = vec![headline];
        if total_answers > 1 {
            tags.push(format!("+{} answers", total_answers - 1));
        }
        tags
    }

    fn errors(&self) -> impl Iterator<Item = &DnsError> {
        self.entries
            .iter()
            .filter_map(|entry| entry.record.error.as_ref())
    }

    fn slot(&mut self, query_type: QueryType) -> &mut RecordResult {
        let index = match self
            .entries
            .iter()
            .position(|entry| entry.query_type == query_type)
        {
            Some(index) => index,
            None => {
                self.entries.push(AnswerEntry {
                    query_type,
                    record: RecordResult::pending(),
                });
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].record
    }
}
