//! Ferrous Lookup Domain Layer
pub mod answer;
pub mod config;
pub mod dns_error;
pub mod dns_record;
pub mod errors;
pub mod lookup_outcome;
pub mod query_filters;
pub mod subject;

pub use answer::{Answer, AnswerEntry};
pub use config::{CliOverrides, Config, ConfigError, LookupOptions, ResultsToShow};
pub use dns_error::{DnsError, RawDnsError};
pub use dns_record::{DnsRecordData, QueryType, RecordResult, ResolverPayload, SoaRecord};
pub use errors::DomainError;
pub use lookup_outcome::{LookupDetails, LookupOutcome};
pub use query_filters::PrivateIpFilter;
pub use subject::{Subject, SubjectKind};
