use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Record kinds a lookup can ask for.
///
/// The seven forward kinds apply to domain subjects; `PTR` is the only kind
/// queried for IP subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum QueryType {
    A,
    AAAA,
    CNAME,
    MX,
    TXT,
    NS,
    SOA,
    PTR,
}

impl QueryType {
    /// Forward kinds in their canonical order.
    pub const DOMAIN_TYPES: [QueryType; 7] = [
        QueryType::A,
        QueryType::AAAA,
        QueryType::CNAME,
        QueryType::MX,
        QueryType::TXT,
        QueryType::NS,
        QueryType::SOA,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::A => "A",
            QueryType::AAAA => "AAAA",
            QueryType::CNAME => "CNAME",
            QueryType::MX => "MX",
            QueryType::TXT => "TXT",
            QueryType::NS => "NS",
            QueryType::SOA => "SOA",
            QueryType::PTR => "PTR",
        }
    }

    /// Resolver operation name reported alongside errors for this kind.
    pub fn syscall(&self) -> &'static str {
        match self {
            QueryType::A => "queryA",
            QueryType::AAAA => "queryAaaa",
            QueryType::CNAME => "queryCname",
            QueryType::MX => "queryMx",
            QueryType::TXT => "queryTxt",
            QueryType::NS => "queryNs",
            QueryType::SOA => "querySoa",
            QueryType::PTR => "getHostByAddr",
        }
    }

    pub fn is_reverse(&self) -> bool {
        matches!(self, QueryType::PTR)
    }

    /// Address kinds are answered with TTL-annotated records.
    pub fn carries_ttl(&self) -> bool {
        matches!(self, QueryType::A | QueryType::AAAA)
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(QueryType::A),
            "AAAA" => Ok(QueryType::AAAA),
            "CNAME" => Ok(QueryType::CNAME),
            "MX" => Ok(QueryType::MX),
            "TXT" => Ok(QueryType::TXT),
            "NS" => Ok(QueryType::NS),
            "SOA" => Ok(QueryType::SOA),
            "PTR" => Ok(QueryType::PTR),
            other => Err(format!("Unknown query type: {other}")),
        }
    }
}

impl TryFrom<String> for QueryType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
