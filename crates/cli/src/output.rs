use ferrous_lookup_application::use_cases::ActionResponse;
use ferrous_lookup_domain::{LookupOutcome, QueryType, RecordResult};
use serde::Serialize;
use std::fmt::Write;

const MISS_MARKER: &str = "-";

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// One summary line per subject, followed by the searched record sets when
/// `details` is set.
pub fn render_outcomes(outcomes: &[LookupOutcome], details: bool) -> String {
    let width = outcomes
        .iter()
        .map(|outcome| outcome.subject.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for outcome in outcomes {
        render_outcome(&mut out, outcome, width, details);
    }
    out
}

pub fn render_response(response: &ActionResponse, query_type: Option<QueryType>) -> String {
    match response {
        ActionResponse::Outcome(outcome) => render_outcomes(std::slice::from_ref(outcome), true),
        ActionResponse::Record(Some(record)) => {
            let mut out = String::new();
            render_record(&mut out, query_type, record);
            out
        }
        ActionResponse::Record(None) => "no result\n".to_string(),
    }
}

fn render_outcome(out: &mut String, outcome: &LookupOutcome, width: usize, details: bool) {
    let summary = if outcome.summary_tags.is_empty() {
        MISS_MARKER.to_string()
    } else {
        outcome.summary_tags.join(" ")
    };
    let _ = writeln!(out, "{:<width$}  {summary}", outcome.subject);

    let Some(lookup) = outcome.details.as_ref().filter(|_| details) else {
        return;
    };

    for entry in lookup.answer.entries() {
        if entry.record.searched {
            render_record(out, Some(entry.query_type), &entry.record);
        }
    }
}

fn render_record(out: &mut String, query_type: Option<QueryType>, record: &RecordResult) {
    let label = query_type.map(|t| t.to_string()).unwrap_or_default();
    let timing = record
        .elapsed_time_ms
        .map(|ms| format!(" ({ms} ms)"))
        .unwrap_or_default();

    if let Some(error) = &record.error {
        let _ = writeln!(out, "    {label:<5} {}{timing}", error.message);
        return;
    }
    if record.results.is_empty() {
        let _ = writeln!(out, "    {label:<5} (none){timing}");
        return;
    }
    for (index, value) in record.results.iter().enumerate() {
        let suffix = if index == 0 { timing.as_str() } else { "" };
        let _ = writeln!(out, "    {label:<5} {value}{suffix}");
    }
}
