pub mod query_type;
pub mod record;
pub mod record_result;

pub use query_type::QueryType;
pub use record::{DnsRecordData, ResolverPayload, SoaRecord};
pub use record_result::RecordResult;
