use ferrous_lookup_domain::{QueryType, RawDnsError};
use hickory_proto::error::ProtoErrorKind;
use hickory_proto::op::ResponseCode;
use hickory_resolver::error::{ResolveError, ResolveErrorKind};

/// Code reported for a resolver failure with no better match.
pub const UNKNOWN_CODE: &str = "EUNKNOWN";

/// Error code for a response that carried no usable answer.
pub fn code_for_response(response_code: ResponseCode) -> &'static str {
    match response_code {
        ResponseCode::NoError => "ENODATA",
        ResponseCode::NXDomain => "ENOTFOUND",
        ResponseCode::ServFail => "ESERVFAIL",
        ResponseCode::Refused => "EREFUSED",
        ResponseCode::FormErr => "EFORMERR",
        ResponseCode::NotImp => "ENOTIMP",
        _ => "EBADRESP",
    }
}

/// Converts a resolver failure into the code table's vocabulary.
///
/// `subject` is the name or address that was queried and ends up in the
/// message the same way a system resolver reports it.
pub fn map_resolve_error(error: &ResolveError, query_type: QueryType, subject: &str) -> RawDnsError {
    let syscall = query_type.syscall();

    let code = match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => code_for_response(*response_code),
        ResolveErrorKind::Timeout => "ETIMEOUT",
        ResolveErrorKind::NoConnections => "ECONNREFUSED",
        ResolveErrorKind::Io(_) => "ECONNREFUSED",
        ResolveErrorKind::Proto(proto) => match proto.kind() {
            ProtoErrorKind::Timeout => "ETIMEOUT",
            ProtoErrorKind::Busy { .. }
            | ProtoErrorKind::Canceled { .. }
            | ProtoErrorKind::Io { .. } => "ECONNREFUSED",
            // Remaining kinds come from decoding the reply.
            _ => "EBADRESP",
        },
        _ => {
            return RawDnsError::new(UNKNOWN_CODE, syscall, error.to_string());
        }
    };

    RawDnsError::new(code, syscall, format!("{syscall} {code} {subject}"))
}
