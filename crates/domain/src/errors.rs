use thiserror::Error;

use crate::dns_error::DnsError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A resolver failure classified as fatal for the batch.
    #[error(transparent)]
    Dns(#[from] DnsError),

    #[error("Invalid lookup subject: {0}")]
    InvalidSubject(String),

    #[error("Invalid DNS server address: {0}")]
    InvalidServerAddress(String),

    #[error("DNS resolver unavailable: {0}")]
    ResolverUnavailable(String),

    #[error("Lookup aborted before completion")]
    LookupAborted,
}

impl DomainError {
    /// The classified resolver error behind this failure, if any.
    pub fn dns_error(&self) -> Option<&DnsError> {
        match self {
            DomainError::Dns(err) => Some(err),
            _ => None,
        }
    }
}
