use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;
use std::sync::Arc;

use crate::errors::DomainError;
use crate::query_filters::PrivateIpFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectKind {
    Domain,
    Ip { address: IpAddr, private: bool },
}

/// One domain name or IP address to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    value: Arc<str>,
    kind: SubjectKind,
}

impl Subject {
    /// Anything that parses as an IP address is an IP subject; everything
    /// else is treated as a domain name.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(DomainError::InvalidSubject(
                "subject cannot be empty".to_string(),
            ));
        }

        match value.parse::<IpAddr>() {
            Ok(address) => Ok(Self::ip(address)),
            Err(_) => Ok(Self::domain(value)),
        }
    }

    pub fn domain(name: &str) -> Self {
        Self {
            value: Arc::from(name),
            kind: SubjectKind::Domain,
        }
    }

    pub fn ip(address: IpAddr) -> Self {
        Self {
            value: Arc::from(address.to_string().as_str()),
            kind: SubjectKind::Ip {
                address,
                private: PrivateIpFilter::is_private_ip(&address),
            },
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn kind(&self) -> SubjectKind {
        self.kind
    }

    pub fn is_ip(&self) -> bool {
        matches!(self.kind, SubjectKind::Ip { .. })
    }

    pub fn is_domain(&self) -> bool {
        matches!(self.kind, SubjectKind::Domain)
    }

    pub fn ip_addr(&self) -> Option<IpAddr> {
        match self.kind {
            SubjectKind::Ip { address, .. } => Some(address),
            SubjectKind::Domain => None,
        }
    }

    pub fn is_private_ip(&self) -> bool {
        matches!(self.kind, SubjectKind::Ip { private: true, .. })
    }
}

impl FromStr for Subject {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
