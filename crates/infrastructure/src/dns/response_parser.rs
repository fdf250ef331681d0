use ferrous_lookup_domain::{DnsRecordData, QueryType, ResolverPayload, SoaRecord};
use hickory_proto::rr::{Name, RData, Record};
use std::net::IpAddr;
use tracing::debug;

use super::record_type_map::QueryTypeMapper;

/// Turns answer records into typed values for one query kind.
///
/// Records of other types (a CNAME chain in front of an `A` answer, for
/// instance) are skipped.
pub struct ResponseParser;

impl ResponseParser {
    pub fn parse<'a>(
        query_type: QueryType,
        records: impl IntoIterator<Item = &'a Record>,
    ) -> ResolverPayload {
        let wanted = QueryTypeMapper::to_hickory(query_type);
        let mut parsed = Vec::new();

        for record in records {
            if record.record_type() != wanted {
                continue;
            }
            let Some(rdata) = record.data() else {
                continue;
            };
            match Self::convert(rdata, record.ttl()) {
                Some(value) => parsed.push(value),
                None => debug!(record_type = %record.record_type(), "Skipping unexpected rdata"),
            }
        }

        // SOA answers are a single value rather than a list.
        if query_type == QueryType::SOA && parsed.len() == 1 {
            if let Some(soa) = parsed.pop() {
                return ResolverPayload::Single(soa);
            }
        }

        ResolverPayload::Many(parsed)
    }

    fn convert(rdata: &RData, ttl: u32) -> Option<DnsRecordData> {
        let value = match rdata {
            RData::A(a) => DnsRecordData::address(IpAddr::V4(a.0), ttl),
            RData::AAAA(aaaa) => DnsRecordData::address(IpAddr::V6(aaaa.0), ttl),
            RData::CNAME(cname) => DnsRecordData::text(display_name(&cname.0)),
            RData::NS(ns) => DnsRecordData::text(display_name(&ns.0)),
            RData::PTR(ptr) => DnsRecordData::text(display_name(&ptr.0)),
            RData::MX(mx) => DnsRecordData::mx(display_name(mx.exchange()), mx.preference()),
            RData::TXT(txt) => {
                let joined: String = txt
                    .iter()
                    .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
                    .collect();
                DnsRecordData::text(joined)
            }
            RData::SOA(soa) => DnsRecordData::Soa(SoaRecord {
                nsname: display_name(soa.mname()),
                hostmaster: display_name(soa.rname()),
                serial: soa.serial(),
                refresh: soa.refresh(),
                retry: soa.retry(),
                expire: soa.expire(),
                minttl: soa.minimum(),
            }),
            _ => return None,
        };
        Some(value)
    }
}

/// Name without the root label's trailing dot.
pub fn display_name(name: &Name) -> String {
    let text = name.to_utf8();
    match text.strip_suffix('.') {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => text,
    }
}
