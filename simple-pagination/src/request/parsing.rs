//! URL decoding and encoding utilities.
//!
//! Used by the request module for query string parsing and by the link
//! builders for query string and path encoding.

use crate::constants::MAX_URL_DECODED_LEN;
use std::borrow::Cow;

/// Error returned when URL decoding fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// Decoded output would exceed maximum length.
    #[error(
        "url decoded output exceeds maximum length ({limit}KB limit)",
        limit = MAX_URL_DECODED_LEN / 1024
    )]
    TooLong,
}

/// Form-style URL decoding (handles %XX sequences and + as space).
///
/// Invalid or truncated escapes are kept verbatim; invalid UTF-8 is replaced
/// lossily.
///
/// # Errors
///
/// Returns [`DecodeError::TooLong`] if the input would decode to more than
/// `MAX_URL_DECODED_LEN` (64KB).
///
/// # Examples
///
/// ```
/// use simple_pagination::url_decode;
///
/// assert_eq!(url_decode("hello%20world").unwrap(), "hello world");
/// assert_eq!(url_decode("hello+world").unwrap(), "hello world");
/// assert_eq!(url_decode("caf%C3%A9").unwrap(), "café");
/// ```
pub fn url_decode(s: &str) -> Result<String, DecodeError> {
    // Lower bound on the decoded length: each escape shrinks by at most 2.
    let escapes = s.bytes().filter(|&b| b == b'%').count();
    if s.len().saturating_sub(escapes.saturating_mul(2)) > MAX_URL_DECODED_LEN {
        return Err(DecodeError::TooLong);
    }

    let spaced: Cow<'_, str> = if s.contains('+') {
        Cow::Owned(s.replace('+', " "))
    } else {
        Cow::Borrowed(s)
    };
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    // Broken escapes are kept verbatim, so only the output length is exact.
    if bytes.len() > MAX_URL_DECODED_LEN {
        return Err(DecodeError::TooLong);
    }
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Form-style URL encoding of a single key or value (space as `+`).
///
/// ```
/// use simple_pagination::url_encode;
///
/// assert_eq!(url_encode("rust lang"), "rust+lang");
/// assert_eq!(url_encode("a&b=c"), "a%26b%3Dc");
/// ```
pub fn url_encode(s: &str) -> String {
    urlencoding::encode(s).replace("%20", "+")
}

/// Characters `iri_to_uri` leaves untouched besides ASCII
/// alphanumerics and `_.-`.
const IRI_SAFE: &[u8] = b"/#%[]=:;$&()+,!?*@'~";

/// Convert an IRI path into a URI by percent-encoding everything that is not
/// URI-safe (non-ASCII, spaces, quotes, ...), leaving reserved characters and
/// existing escapes alone.
///
/// ```
/// use simple_pagination::iri_to_uri;
///
/// assert_eq!(iri_to_uri("/blog/café/"), "/blog/caf%C3%A9/");
/// assert_eq!(iri_to_uri("/a b?x=1"), "/a%20b?x=1");
/// ```
pub fn iri_to_uri(iri: &str) -> String {
    let mut out = String::with_capacity(iri.len());
    for &b in iri.as_bytes() {
        if b.is_ascii_alphanumeric() || b"_.-".contains(&b) || IRI_SAFE.contains(&b) {
            out.push(char::from(b));
        } else {
            out.push_str(&format!("%{b:02X}"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_decode() {
        assert_eq!(url_decode("hello%20world").unwrap(), "hello world");
        assert_eq!(url_decode("hello+world").unwrap(), "hello world");
        assert_eq!(url_decode("a%2Fb").unwrap(), "a/b");
        assert_eq!(url_decode("plain").unwrap(), "plain");
    }

    #[test]
    fn test_url_decode_encoded_plus_stays_plus() {
        assert_eq!(url_decode("1%2B1").unwrap(), "1+1");
    }

    #[test]
    fn test_url_decode_too_long() {
        let long = "a".repeat(MAX_URL_DECODED_LEN + 1);
        assert_eq!(url_decode(&long), Err(DecodeError::TooLong));
        assert!(url_decode(&"a".repeat(MAX_URL_DECODED_LEN)).is_ok());
    }

    #[test]
    fn test_url_encode_reserved() {
        assert_eq!(url_encode("page"), "page");
        assert_eq!(url_encode("a b"), "a+b");
        assert_eq!(url_encode("x/y?z"), "x%2Fy%3Fz");
        assert_eq!(url_encode("café"), "caf%C3%A9");
    }

    #[test]
    fn test_iri_to_uri_keeps_reserved() {
        assert_eq!(iri_to_uri("/path/?a=1&b=2#frag"), "/path/?a=1&b=2#frag");
        assert_eq!(iri_to_uri("/already%20encoded/"), "/already%20encoded/");
        assert_eq!(iri_to_uri("/quote\"d"), "/quote%22d");
    }
}
