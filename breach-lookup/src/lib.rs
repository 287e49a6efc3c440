//! K-anonymous breached-password lookup against a Have I Been Pwned style
//! range API.
//!
//! A password never leaves the process: it is SHA-1 hashed locally, only the
//! first five hex characters of the digest are sent to the range endpoint,
//! and the returned `SUFFIX:COUNT` lines are matched against the remaining
//! thirty-five characters in memory.
//!
//! Lookups are gated per tenant. A tenant with the checker disabled, or
//! without an API key, short-circuits to "not breached" before any hashing
//! or network I/O happens.

use std::time::Duration;

pub mod client;
pub mod config;
pub mod error;
pub mod hash;
pub mod service;

pub use client::{BreachLookupClient, SuffixCounts, parse_range_body};
pub use config::{BoxError, ConfigProvider, TenantConfig, TenantGate};
pub use error::Error;
pub use hash::{DIGEST_LEN, PREFIX_LEN, sha1_hex, split_digest};
pub use service::{BreachCheckService, BreachResult};

/// Base URL of the Have I Been Pwned password range API.
pub const DEFAULT_RANGE_API_URL: &str = "https://api.pwnedpasswords.com/range";

/// Request header carrying the provider API key.
pub const API_KEY_HEADER: &str = "hibp-api-key";

/// Default deadline for a single range query.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
