use std::collections::HashMap;

use crate::API_KEY_HEADER;
use crate::error::Error;

/// Suffix to occurrence count for one hash prefix, built from a single range
/// response and discarded with it.
pub type SuffixCounts = HashMap<String, u64>;

/// Client for the k-anonymity range endpoint of the breach-data provider.
///
/// Holds no per-tenant state; the API key is supplied per call so one client
/// can serve every tenant concurrently.
pub struct BreachLookupClient {
    http: reqwest::Client,
    base_url: String,
}

impl BreachLookupClient {
    /// Creates a client for the given range API base URL.
    ///
    /// The injected `reqwest::Client` should carry a bounded request timeout
    /// so a slow provider cannot block the caller indefinitely.
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Issues one range query: `GET {base_url}/{prefix}` with the API key in
    /// the dedicated request header.
    ///
    /// Single attempt, no retries; retry and backoff policy belongs to the
    /// caller.
    #[tracing::instrument(skip(self, api_key))]
    pub async fn query(&self, api_key: &str, prefix: &str) -> Result<SuffixCounts, Error> {
        let url = format!("{}/{}", self.base_url, prefix);
        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, api_key)
            .send()
            .await
            .map_err(|source| Error::UpstreamUnavailable {
                prefix: prefix.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::UpstreamStatus {
                prefix: prefix.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| Error::ResponseParse {
            prefix: prefix.to_string(),
            detail: format!("unreadable response body: {source}"),
        })?;

        parse_range_body(prefix, &body)
    }
}

/// Parses the newline-delimited `SUFFIX:COUNT` body of a range response.
///
/// Tolerates both `\n` and `\r\n` line endings. A line that does not split
/// on `:` into exactly two fields is dropped. A well-formed line whose count
/// is not a base-10 integer fails the whole parse rather than being guessed
/// at. An empty body yields an empty table.
pub fn parse_range_body(prefix: &str, body: &str) -> Result<SuffixCounts, Error> {
    let mut counts = SuffixCounts::new();
    for line in body.lines() {
        let Some((suffix, count)) = line.split_once(':') else {
            continue;
        };
        if count.contains(':') {
            continue;
        }
        let count: u64 = count.parse().map_err(|_| Error::ResponseParse {
            prefix: prefix.to_string(),
            detail: format!("non-numeric count '{count}' for suffix {suffix}"),
        })?;
        counts.insert(suffix.to_string(), count);
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_crlf_and_lf_bodies() {
        let body = "0123456789ABCDEF0123456789ABCDEF01234567:3\r\n\
                    ABCDEF0123456789ABCDEF0123456789ABCDEF01:42\n\
                    FEDCBA9876543210FEDCBA9876543210FEDCBA98:1337";
        let counts = parse_range_body("CBFDA", body).unwrap();

        assert_eq!(counts.len(), 3);
        assert_eq!(counts["0123456789ABCDEF0123456789ABCDEF01234567"], 3);
        assert_eq!(counts["ABCDEF0123456789ABCDEF0123456789ABCDEF01"], 42);
        assert_eq!(counts["FEDCBA9876543210FEDCBA9876543210FEDCBA98"], 1337);
    }

    #[test]
    fn empty_body_yields_empty_table() {
        assert!(parse_range_body("CBFDA", "").unwrap().is_empty());
        assert!(parse_range_body("CBFDA", "\r\n\r\n").unwrap().is_empty());
    }

    #[test]
    fn drops_lines_without_exactly_two_fields() {
        let body = "0123456789ABCDEF0123456789ABCDEF01234567\n\
                    ABCDEF0123456789ABCDEF0123456789ABCDEF01:1:2\n\
                    FEDCBA9876543210FEDCBA9876543210FEDCBA98:7";
        let counts = parse_range_body("CBFDA", body).unwrap();

        assert_eq!(counts.len(), 1);
        assert_eq!(counts["FEDCBA9876543210FEDCBA9876543210FEDCBA98"], 7);
    }

    #[test]
    fn non_numeric_count_fails_the_parse() {
        let body = "FEDCBA9876543210FEDCBA9876543210FEDCBA98:many";
        let err = parse_range_body("CBFDA", body).unwrap_err();
        assert!(matches!(err, Error::ResponseParse { prefix, .. } if prefix == "CBFDA"));
    }

    #[test]
    fn negative_count_fails_the_parse() {
        let body = "FEDCBA9876543210FEDCBA9876543210FEDCBA98:-1";
        assert!(parse_range_body("CBFDA", body).is_err());
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = BreachLookupClient::new(
            reqwest::Client::new(),
            "https://api.pwnedpasswords.com/range/",
        );
        assert_eq!(client.base_url, "https://api.pwnedpasswords.com/range");
    }
}
