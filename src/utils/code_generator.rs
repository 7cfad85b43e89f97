//! Deterministic short code derivation.
//!
//! A short code is a pure function of the normalized URL: the MD5 digest is
//! encoded as URL-safe base64, `=` padding is stripped, and the first
//! [`CODE_LENGTH`] characters are kept. The same URL yields the same code on
//! every process and every store.

use base64::Engine as _;

/// Maximum number of characters in a generated code.
pub const CODE_LENGTH: usize = 7;

/// Derives the short code for an already normalized URL.
///
/// Padding is stripped before truncation. With a 16-byte MD5 digest the
/// padding only ever occupies the last two of 24 characters, so codes are
/// always exactly [`CODE_LENGTH`] long.
///
/// # Examples
///
/// ```
/// use tinylink::utils::code_generator::generate_code;
///
/// assert_eq!(generate_code("http://example.com"), "qbnwQzb");
/// ```
pub fn generate_code(normalized_url: &str) -> String {
    let digest = md5::compute(normalized_url.as_bytes());
    let encoded = base64::engine::general_purpose::URL_SAFE.encode(digest.0);

    encoded
        .trim_end_matches('=')
        .chars()
        .take(CODE_LENGTH)
        .collect()
}
