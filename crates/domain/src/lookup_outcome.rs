use serde::Serialize;

use crate::answer::Answer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupDetails {
    pub answer: Answer,
    pub total_answers: usize,
    /// Servers the resolver was configured with for this lookup.
    pub servers: Vec<String>,
    pub domain_not_found: bool,
    pub reverse_dns_not_found: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupOutcome {
    pub subject: String,
    pub summary_tags: Vec<String>,
    /// `None` when the subject was filtered out or had nothing to show.
    pub details: Option<LookupDetails>,
}

impl LookupOutcome {
    pub fn miss(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            summary_tags: Vec::new(),
            details: None,
        }
    }

    pub fn is_miss(&self) -> bool {
        self.details.is_none()
    }

    pub fn total_answers(&self) -> usize {
        self.details
            .as_ref()
            .map_or(0, |details| details.total_answers)
    }
}
