pub mod error_map;
pub mod hickory_client;
pub mod record_type_map;
pub mod response_parser;

pub use error_map::{code_for_response, map_resolve_error};
pub use hickory_client::HickoryDnsClient;
pub use record_type_map::QueryTypeMapper;
pub use response_parser::{display_name, ResponseParser};
