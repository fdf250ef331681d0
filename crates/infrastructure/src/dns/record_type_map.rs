use ferrous_lookup_domain::QueryType;
use hickory_proto::rr::RecordType as HickoryRecordType;

/// Mapping from query kinds to hickory record types
pub struct QueryTypeMapper;

impl QueryTypeMapper {
    pub fn to_hickory(query_type: QueryType) -> HickoryRecordType {
        match query_type {
            QueryType::A => HickoryRecordType::A,
            QueryType::AAAA => HickoryRecordType::AAAA,
            QueryType::CNAME => HickoryRecordType::CNAME,
            QueryType::MX => HickoryRecordType::MX,
            QueryType::TXT => HickoryRecordType::TXT,
            QueryType::NS => HickoryRecordType::NS,
            QueryType::SOA => HickoryRecordType::SOA,
            QueryType::PTR => HickoryRecordType::PTR,
        }
    }

    /// Returns `None` for record types no lookup asks for.
    pub fn from_hickory(record_type: HickoryRecordType) -> Option<QueryType> {
        match record_type {
            HickoryRecordType::A => Some(QueryType::A),
            HickoryRecordType::AAAA => Some(QueryType::AAAA),
            HickoryRecordType::CNAME => Some(QueryType::CNAME),
            HickoryRecordType::MX => Some(QueryType::MX),
            HickoryRecordType::TXT => Some(QueryType::TXT),
            HickoryRecordType::NS => Some(QueryType::NS),
            HickoryRecordType::SOA => Some(QueryType::SOA),
            HickoryRecordType::PTR => Some(QueryType::PTR),
            _ => None,
        }
    }
}
