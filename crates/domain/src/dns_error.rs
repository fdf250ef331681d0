use serde::Serialize;
use thiserror::Error;

/// Syscall label carried by reverse (PTR) lookup failures.
pub const REVERSE_LOOKUP_SYSCALL: &str = "getHostByAddr";

/// Message for `ENOTFOUND`, shared by forward and reverse lookups.
pub const DOMAIN_NOT_FOUND_MESSAGE: &str = "Domain name not found.";

/// Codes recorded on the record result instead of failing the batch.
const RECOVERABLE_CODES: &[&str] = &["ENODATA", "ENOTFOUND", "EBADRESP"];

const DNS_ERROR_MESSAGES: &[(&str, &str)] = &[
    ("ENODATA", "DNS server returned answer with no data."),
    ("EFORMERR", "DNS server claims query was misformatted."),
    ("ESERVFAIL", "DNS server returned general failure."),
    ("ENOTFOUND", DOMAIN_NOT_FOUND_MESSAGE),
    ("ENOTIMP", "DNS server does not implement requested operation."),
    ("EREFUSED", "DNS server refused query."),
    ("EBADQUERY", "Misformatted DNS query."),
    ("EBADNAME", "Misformatted domain name."),
    ("EBADFAMILY", "Unsupported address family."),
    ("EBADRESP", "Misformatted DNS reply."),
    ("ECONNREFUSED", "Could not contact DNS servers."),
    ("ETIMEOUT", "Timeout while contacting DNS servers."),
    ("EEOF", "End of file."),
    ("EFILE", "Error reading file."),
    ("ENOMEM", "Out of memory."),
    ("EDESTRUCTION", "Channel is being destroyed."),
    ("EBADSTR", "Misformatted string."),
    ("EBADFLAGS", "Illegal flags specified."),
    ("ENONAME", "Given hostname is not numeric."),
    ("EBADHINTS", "Illegal hints flags specified."),
    (
        "ENOTINITIALIZED",
        "c-ares library initialization not yet performed.",
    ),
    ("ELOADIPHLPAPI", "Error loading iphlpapi.dll."),
    (
        "EADDRGETNETWORKPARAMS",
        "Could not find GetNetworkParams function.",
    ),
    ("ECANCELLED", "DNS query cancelled."),
];

/// Unclassified failure as reported by the DNS client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{syscall} {code}: {message}")]
pub struct RawDnsError {
    pub code: String,
    pub syscall: String,
    pub message: String,
}

impl RawDnsError {
    pub fn new(
        code: impl Into<String>,
        syscall: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            syscall: syscall.into(),
            message: message.into(),
        }
    }
}

/// Resolver failure with its human-readable message resolved.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{message}")]
pub struct DnsError {
    pub code: String,
    pub syscall: String,
    pub message: String,
    pub detail: String,
}

impl DnsError {
    /// Resolves the message for a raw error.
    ///
    /// The code is looked up as given, then with an `E` prefix. Unknown codes
    /// keep the resolver's own message.
    pub fn classify(raw: RawDnsError) -> Self {
        let RawDnsError {
            code,
            syscall,
            message,
        } = raw;

        match known_message(&code) {
            Some(text) => Self {
                code,
                syscall,
                message: text.to_string(),
                detail: text.to_string(),
            },
            None => Self {
                code,
                syscall,
                detail: message.clone(),
                message,
            },
        }
    }

    /// No-data, not-found and malformed-reply answers are expected per query
    /// type; anything else means the subject cannot be looked up.
    pub fn is_recoverable(&self) -> bool {
        RECOVERABLE_CODES.contains(&self.code.as_str())
    }

    pub fn is_fatal(&self) -> bool {
        !self.is_recoverable()
    }

    pub fn is_reverse_lookup(&self) -> bool {
        self.syscall == REVERSE_LOOKUP_SYSCALL
    }

    pub fn is_domain_not_found(&self) -> bool {
        self.message == DOMAIN_NOT_FOUND_MESSAGE && !self.is_reverse_lookup()
    }

    pub fn is_reverse_not_found(&self) -> bool {
        self.code == "ENOTFOUND" && self.is_reverse_lookup()
    }
}

impl From<RawDnsError> for DnsError {
    fn from(raw: RawDnsError) -> Self {
        Self::classify(raw)
    }
}

/// Table message for `code`, trying the `E`-prefixed form as well.
pub fn known_message(code: &str) -> Option<&'static str> {
    lookup(code).or_else(|| lookup(&format!("E{code}")))
}

fn lookup(code: &str) -> Option<&'static str> {
    DNS_ERROR_MESSAGES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, message)| *message)
}
