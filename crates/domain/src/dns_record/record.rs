use serde::Serialize;
use std::fmt;
use std::net::IpAddr;

/// Start-of-authority fields as returned for a `SOA` query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SoaRecord {
    pub nsname: String,
    pub hostmaster: String,
    pub serial: u32,
    pub refresh: i32,
    pub retry: i32,
    pub expire: i32,
    pub minttl: u32,
}

/// One typed record returned by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DnsRecordData {
    /// `A` / `AAAA` answer.
    Address { address: IpAddr, ttl: u32 },
    Mx { exchange: String, priority: u16 },
    Soa(SoaRecord),
    /// CNAME, NS, PTR and TXT answers carry a single raw value.
    Text(String),
}

impl DnsRecordData {
    pub fn address(address: IpAddr, ttl: u32) -> Self {
        DnsRecordData::Address { address, ttl }
    }

    pub fn mx(exchange: impl Into<String>, priority: u16) -> Self {
        DnsRecordData::Mx {
            exchange: exchange.into(),
            priority,
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        DnsRecordData::Text(value.into())
    }

    /// The value a summary line shows for this record: the address, the
    /// mail exchange, the primary name server, or the raw value.
    pub fn primary_value(&self) -> String {
        match self {
            DnsRecordData::Address { address, .. } => address.to_string(),
            DnsRecordData::Mx { exchange, .. } => exchange.clone(),
            DnsRecordData::Soa(soa) => soa.nsname.clone(),
            DnsRecordData::Text(value) => value.clone(),
        }
    }
}

impl fmt::Display for DnsRecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DnsRecordData::Address { address, ttl } => write!(f, "{address} (ttl {ttl})"),
            DnsRecordData::Mx { exchange, priority } => write!(f, "{priority} {exchange}"),
            DnsRecordData::Soa(soa) => write!(
                f,
                "{} {} {} {} {} {} {}",
                soa.nsname,
                soa.hostmaster,
                soa.serial,
                soa.refresh,
                soa.retry,
                soa.expire,
                soa.minttl
            ),
            DnsRecordData::Text(value) => f.write_str(value),
        }
    }
}

/// What a forward query hands back: most kinds answer with a sequence, some
/// (SOA) with a single bare value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolverPayload {
    Many(Vec<DnsRecordData>),
    Single(DnsRecordData),
}

impl ResolverPayload {
    pub fn into_records(self) -> Vec<DnsRecordData> {
        match self {
            ResolverPayload::Many(records) => records,
            ResolverPayload::Single(record) => vec![record],
        }
    }
}

impl From<Vec<DnsRecordData>> for ResolverPayload {
    fn from(records: Vec<DnsRecordData>) -> Self {
        ResolverPayload::Many(records)
    }
}
