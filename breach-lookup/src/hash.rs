use sha1::{Digest, Sha1};

use crate::error::Error;

/// Length of a SHA-1 hex digest in characters.
pub const DIGEST_LEN: usize = 40;

/// Length of the digest prefix sent to the range API. Everything after it
/// stays local.
pub const PREFIX_LEN: usize = 5;

/// SHA-1 of the UTF-8 password bytes, rendered as a 40-character uppercase
/// hex string.
///
/// SHA-1 is what the provider's k-anonymity protocol is defined over; this
/// is a compatibility requirement, not a security choice.
pub fn sha1_hex(password: &str) -> String {
    let digest = Sha1::digest(password.as_bytes());
    format!("{digest:X}")
}

/// Splits a digest into its public prefix and locally-compared suffix.
///
/// A digest of exactly [`PREFIX_LEN`] characters yields an empty suffix,
/// which a table lookup then treats as "not found".
pub fn split_digest(digest: &str) -> Result<(&str, &str), Error> {
    if digest.len() < PREFIX_LEN || !digest.is_char_boundary(PREFIX_LEN) {
        return Err(Error::InvalidDigest { len: digest.len() });
    }
    Ok(digest.split_at(PREFIX_LEN))
}
