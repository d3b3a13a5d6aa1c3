//! URL decoding edge cases and link-path encoding

use super::super::*;
use crate::constants::MAX_URL_DECODED_LEN;

#[test]
fn test_decode_unicode() {
    assert_eq!(url_decode("%F0%9F%98%80").unwrap(), "😀");
    assert_eq!(url_decode("%E6%97%A5%E6%9C%AC%E8%AA%9E").unwrap(), "日本語");
    assert_eq!(
        url_decode("john_%F0%9F%91%A8%E2%80%8D%F0%9F%92%BB").unwrap(),
        "john_👨‍💻"
    );
}

#[test]
fn test_decode_invalid_utf8_is_lossy() {
    // Overlong encoding of '/' never decodes to a slash
    let decoded = url_decode("%c0%af").unwrap();
    assert!(!decoded.contains('/'));
    assert!(decoded.contains('\u{FFFD}'));
}

#[test]
fn test_decode_keeps_broken_escapes() {
    assert_eq!(url_decode("a%20b%ZZc").unwrap(), "a b%ZZc");
    assert_eq!(url_decode("%2").unwrap(), "%2");
    assert_eq!(url_decode("%").unwrap(), "%");
    assert_eq!(url_decode("%%").unwrap(), "%%");
}

#[test]
fn test_decode_single_level_only() {
    assert_eq!(url_decode("%25").unwrap(), "%");
    assert_eq!(url_decode("%2525").unwrap(), "%25");
    assert_eq!(url_decode("%252e%252e%252f").unwrap(), "%2e%2e%2f");
}

#[test]
fn test_encode_then_parse_preserves_value() {
    let raw = "a&b=c d/é";
    let req = Request::new(format!("/p?k={}", url_encode(raw)));
    assert_eq!(req.query("k"), Some(raw));
}

#[test]
fn test_iri_to_uri_non_ascii_path() {
    assert_eq!(iri_to_uri("/日本/"), "/%E6%97%A5%E6%9C%AC/");
    assert_eq!(iri_to_uri("/~user/a+b/"), "/~user/a+b/");
}

#[test]
fn test_malformed_empty_request() {
    // Completely empty request target
    let req = Request::new(String::new());

    assert_eq!(req.path(), "");
    assert_eq!(req.path_without_query(), "");
    assert_eq!(req.query("any"), None);
}

#[test]
fn test_decode_limit_counts_kept_escapes() {
    let percents = "%".repeat(200_000);
    assert_eq!(url_decode(&percents), Err(DecodeError::TooLong));

    let broken = "%zz".repeat(50_000);
    assert_eq!(url_decode(&broken), Err(DecodeError::TooLong));

    // Real escapes still shrink below the limit
    let escaped = "%41".repeat(MAX_URL_DECODED_LEN);
    assert_eq!(url_decode(&escaped).unwrap().len(), MAX_URL_DECODED_LEN);
}

#[test]
fn test_iri_to_uri_escapes_uppercase_hex() {
    assert_eq!(iri_to_uri("/a\"b<c>"), "/a%22b%3Cc%3E");
    assert_eq!(iri_to_uri("/ñ"), "/%C3%B1");
}
