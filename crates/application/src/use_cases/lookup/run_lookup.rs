use ferrous_lookup_domain::{
    Answer, DnsError, DomainError, LookupDetails, LookupOptions, LookupOutcome, QueryType,
    RawDnsError, ResolverPayload, Subject,
};
use futures::future::try_join_all;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use crate::services::ResolverAdapter;

/// One finished query, merged into the subject's answer once all of the
/// subject's queries have settled.
struct QueryCompletion {
    query_type: QueryType,
    outcome: Result<ResolverPayload, DnsError>,
    elapsed_ms: u64,
}

/// Runs a batch of lookups.
///
/// Subjects are looked up at most `subject_concurrency` at a time, and each
/// domain subject keeps at most `query_concurrency` queries in flight. A
/// fatal resolver error fails the whole batch.
pub struct RunLookupUseCase {
    resolver: Arc<ResolverAdapter>,
}

impl RunLookupUseCase {
    pub fn new(resolver: Arc<ResolverAdapter>) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &Arc<ResolverAdapter> {
        &self.resolver
    }

    /// Returns one outcome per subject, in input order.
    pub async fn execute(
        &self,
        subjects: &[Subject],
        options: &LookupOptions,
    ) -> Result<Vec<LookupOutcome>, DomainError> {
        let start = Instant::now();

        self.resolver.set_server(&options.dns_server).await?;
        let servers = self.resolver.servers();

        let limiter = Semaphore::new(options.subject_concurrency.max(1));
        let lookups = subjects
            .iter()
            .map(|subject| self.lookup_subject(subject, options, &limiter, &servers));

        let outcomes = try_join_all(lookups).await.inspect_err(|e| {
            warn!(error = %e, subjects = subjects.len(), "Lookup batch aborted");
        })?;

        info!(
            subjects = subjects.len(),
            elapsed_ms = millis_since(start),
            "Lookup batch completed"
        );

        Ok(outcomes)
    }

    async fn lookup_subject(
        &self,
        subject: &Subject,
        options: &LookupOptions,
        limiter: &Semaphore,
        servers: &[String],
    ) -> Result<LookupOutcome, DomainError> {
        if options.private_ip_only && subject.is_ip() && !subject.is_private_ip() {
            debug!(subject = %subject, "Skipping public IP");
            return Ok(LookupOutcome::miss(subject.value()));
        }

        let _permit = limiter
            .acquire()
            .await
            .map_err(|_| DomainError::LookupAborted)?;

        let mut answer = Answer::blank(subject);
        for completion in self.run_queries(subject, options).await? {
            answer.record_completion(
                completion.query_type,
                completion.outcome,
                completion.elapsed_ms,
            );
        }
        answer.sort();

        Ok(build_outcome(subject, answer, options, servers))
    }

    async fn run_queries(
        &self,
        subject: &Subject,
        options: &LookupOptions,
    ) -> Result<Vec<QueryCompletion>, DomainError> {
        if let Some(ip) = subject.ip_addr() {
            return Ok(vec![self.reverse_query(subject, ip).await?]);
        }

        let limiter = Semaphore::new(options.query_concurrency.max(1));
        let queries = options
            .effective_query_types()
            .into_iter()
            .map(|query_type| {
                let limiter = &limiter;
                async move {
                    let _permit = limiter
                        .acquire()
                        .await
                        .map_err(|_| DomainError::LookupAborted)?;
                    self.forward_query(subject, query_type).await
                }
            });

        try_join_all(queries).await
    }

    async fn forward_query(
        &self,
        subject: &Subject,
        query_type: QueryType,
    ) -> Result<QueryCompletion, DomainError> {
        let start = Instant::now();
        let result = self.resolver.forward_query(subject.value(), query_type).await;
        settle(subject, query_type, result, start)
    }

    async fn reverse_query(
        &self,
        subject: &Subject,
        ip: IpAddr,
    ) -> Result<QueryCompletion, DomainError> {
        let start = Instant::now();
        let result = self.resolver.reverse_query(ip).await;
        settle(subject, QueryType::PTR, result, start)
    }
}

/// Classifies a finished query. Recoverable errors stay with the query;
/// fatal ones abort the batch.
fn settle(
    subject: &Subject,
    query_type: QueryType,
    result: Result<ResolverPayload, RawDnsError>,
    start: Instant,
) -> Result<QueryCompletion, DomainError> {
    let elapsed_ms = millis_since(start);

    let outcome = match result {
        Ok(payload) => {
            debug!(subject = %subject, query_type = %query_type, elapsed_ms, "Query answered");
            Ok(payload)
        }
        Err(raw) => {
            let error = DnsError::classify(raw);
            if error.is_fatal() {
                warn!(
                    subject = %subject,
                    query_type = %query_type,
                    code = %error.code,
                    error = %error,
                    "Fatal DNS error"
                );
                return Err(DomainError::Dns(error));
            }
            debug!(
                subject = %subject,
                query_type = %query_type,
                code = %error.code,
                elapsed_ms,
                "Query failed"
            );
            Err(error)
        }
    };

    Ok(QueryCompletion {
        query_type,
        outcome,
        elapsed_ms,
    })
}

fn build_outcome(
    subject: &Subject,
    answer: Answer,
    options: &LookupOptions,
    servers: &[String],
) -> LookupOutcome {
    let total_answers = answer.total_answers();

    if options.answer_only() && total_answers == 0 {
        debug!(subject = %subject, "No answers, reporting miss");
        return LookupOutcome::miss(subject.value());
    }

    let domain_not_found = subject.is_domain() && answer.is_domain_not_found();
    let reverse_dns_not_found = subject.is_ip() && answer.is_reverse_not_found();
    let summary_tags = answer.summary_tags(domain_not_found, reverse_dns_not_found, total_answers);

    LookupOutcome {
        subject: subject.value().to_string(),
        summary_tags,
        details: Some(LookupDetails {
            answer,
            total_answers,
            servers: servers.to_vec(),
            domain_not_found,
            reverse_dns_not_found,
        }),
    }
}

fn millis_since(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
