use serde::{Deserialize, Serialize};

use crate::dns_record::QueryType;

/// Which subjects get a detailed result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultsToShow {
    #[default]
    Always,
    /// Subjects without a single answer are reported as misses.
    #[serde(alias = "answerOnly")]
    AnswerOnly,
}

/// Options for one lookup batch
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LookupOptions {
    /// Server to query; empty means the configured upstream servers
    #[serde(default)]
    pub dns_server: String,

    /// Only look up IP subjects in private ranges
    #[serde(default)]
    pub private_ip_only: bool,

    /// Forward kinds to query for domain subjects; empty means `A`
    #[serde(default)]
    pub query_types: Vec<QueryType>,

    #[serde(default)]
    pub results_to_show: ResultsToShow,

    /// Subjects looked up at the same time
    #[serde(default = "default_subject_concurrency")]
    pub subject_concurrency: usize,

    /// Queries in flight at the same time for one subject
    #[serde(default = "default_query_concurrency")]
    pub query_concurrency: usize,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            dns_server: String::new(),
            private_ip_only: false,
            query_types: Vec::new(),
            results_to_show: ResultsToShow::default(),
            subject_concurrency: default_subject_concurrency(),
            query_concurrency: default_query_concurrency(),
        }
    }
}

impl LookupOptions {
    /// Query types to run for a domain subject, without duplicates and
    /// without `PTR`, falling back to `A`.
    pub fn effective_query_types(&self) -> Vec<QueryType> {
        let mut types: Vec<QueryType> = Vec::with_capacity(self.query_types.len());
        for query_type in &self.query_types {
            if !query_type.is_reverse() && !types.contains(query_type) {
                types.push(*query_type);
            }
        }

        if types.is_empty() {
            types.push(QueryType::A);
        }
        types
    }

    pub fn with_query_types(mut self, query_types: Vec<QueryType>) -> Self {
        self.query_types = query_types;
        self
    }

    pub fn answer_only(&self) -> bool {
        self.results_to_show == ResultsToShow::AnswerOnly
    }
}

fn default_subject_concurrency() -> usize {
    2
}

fn default_query_concurrency() -> usize {
    5
}
