//! Configuration module for Ferrous Lookup
//!
//! - `root`: top-level configuration, file loading and CLI overrides
//! - `dns`: resolver settings and server address parsing
//! - `lookup`: per-batch lookup options
//! - `logging`: logging settings
//! - `errors`: configuration errors

pub mod dns;
pub mod errors;
pub mod logging;
pub mod lookup;
pub mod root;

pub use dns::{parse_server_address, DnsConfig, DEFAULT_DNS_PORT};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use lookup::{LookupOptions, ResultsToShow};
pub use root::{CliOverrides, Config};
