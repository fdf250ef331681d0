use ferrous_lookup_domain::{
    DomainError, LookupOptions, LookupOutcome, QueryType, RecordResult, ResultsToShow, Subject,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use super::RunLookupUseCase;

/// Follow-up requests issued after a batch has been displayed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "action", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LookupAction {
    /// Look the subject up again with the current options.
    RetryLookup { subject: String },
    /// Run one query type that was not part of the original batch.
    RunQuery {
        subject: String,
        #[serde(rename = "type")]
        query_type: QueryType,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ActionResponse {
    Outcome(LookupOutcome),
    Record(Option<RecordResult>),
}

pub struct HandleLookupActionUseCase {
    lookup: Arc<RunLookupUseCase>,
}

impl HandleLookupActionUseCase {
    pub fn new(lookup: Arc<RunLookupUseCase>) -> Self {
        Self { lookup }
    }

    pub async fn execute(
        &self,
        action: LookupAction,
        options: &LookupOptions,
    ) -> Result<ActionResponse, DomainError> {
        debug!(?action, "Handling lookup action");

        match action {
            LookupAction::RetryLookup { subject } => {
                let subject = Subject::parse(&subject)?;
                self.retry(&subject, options)
                    .await
                    .map(ActionResponse::Outcome)
            }
            LookupAction::RunQuery {
                subject,
                query_type,
            } => {
                let subject = Subject::parse(&subject)?;
                self.run_single_query(&subject, query_type, options)
                    .await
                    .map(ActionResponse::Record)
            }
        }
    }

    pub async fn retry(
        &self,
        subject: &Subject,
        options: &LookupOptions,
    ) -> Result<LookupOutcome, DomainError> {
        let mut outcomes = self
            .lookup
            .execute(std::slice::from_ref(subject), options)
            .await?;
        outcomes.pop().ok_or(DomainError::LookupAborted)
    }

    /// Result for `query_type` alone, or `None` when the lookup produced no
    /// slot for it (filtered subject, or a kind that does not apply).
    pub async fn run_single_query(
        &self,
        subject: &Subject,
        query_type: QueryType,
        options: &LookupOptions,
    ) -> Result<Option<RecordResult>, DomainError> {
        let mut narrowed = options.clone().with_query_types(vec![query_type]);
        // The caller asked for this kind, so an empty result is still reported.
        narrowed.results_to_show = ResultsToShow::Always;
        let outcome = self.retry(subject, &narrowed).await?;

        Ok(outcome
            .details
            .and_then(|details| details.answer.into_record(query_type)))
    }
}
