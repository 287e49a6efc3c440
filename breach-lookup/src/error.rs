use crate::config::BoxError;

/// Errors surfaced by the breach lookup core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The tenant configuration store could not be reached or returned a
    /// malformed record.
    #[error("configuration unavailable for tenant '{tenant}': {source}")]
    ConfigUnavailable {
        tenant: String,
        #[source]
        source: BoxError,
    },

    /// A digest too short to carry the five-character public prefix. Should
    /// be unreachable for digests produced by [`crate::hash::sha1_hex`].
    #[error("digest of {len} bytes cannot be split into prefix and suffix")]
    InvalidDigest { len: usize },

    /// The range request could not be sent or did not complete in time.
    #[error("range query failed for prefix {prefix}: {source}")]
    UpstreamUnavailable {
        prefix: String,
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered with a non-success status.
    #[error("range query for prefix {prefix} returned HTTP {status}")]
    UpstreamStatus { prefix: String, status: u16 },

    /// The response body could not be read as text, or a well-formed
    /// `SUFFIX:COUNT` line carried a non-numeric count.
    #[error("unparseable range response for prefix {prefix}: {detail}")]
    ResponseParse { prefix: String, detail: String },

    /// Uniform wrapper returned by password checks, carrying the underlying
    /// cause. Callers see this instead of a false "0 breaches".
    #[error("breach check failed: {source}")]
    BreachCheck {
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn into_check_error(self) -> Error {
        Error::BreachCheck { source: Box::new(self) }
    }
}
