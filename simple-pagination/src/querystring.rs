//! Page-aware query string helpers.

use crate::constants::RESERVED_QUERYSTRING_KEY;
use crate::request::{QueryParams, Request};
use std::num::IntErrorKind;

/// Return a query string pointing at `page_number`, preserving every other
/// parameter of `query`.
///
/// The default page needs no parameter, so for `page_number == default_number`
/// the key is dropped. The reserved `querystring_key` parameter is always
/// dropped. The result starts with `?`, or is empty when nothing is left.
///
/// ```
/// use simple_pagination::{QueryParams, querystring_for_page};
///
/// let query = QueryParams::parse("q=rust&page=2");
/// assert_eq!(querystring_for_page(&query, 3, "page", 1), "?q=rust&page=3");
/// assert_eq!(querystring_for_page(&query, 1, "page", 1), "?q=rust");
/// assert_eq!(querystring_for_page(&QueryParams::new(), 1, "page", 1), "");
/// ```
pub fn querystring_for_page(
    query: &QueryParams,
    page_number: usize,
    querystring_key: &str,
    default_number: usize,
) -> String {
    let mut params = query.clone();
    if page_number == default_number {
        params.remove(querystring_key);
    } else {
        params.set(querystring_key, page_number.to_string());
    }
    params.remove(RESERVED_QUERYSTRING_KEY);

    if params.is_empty() {
        String::new()
    } else {
        format!("?{}", params.to_query_string())
    }
}

/// Read the requested page number from the request's query string.
///
/// Uses the last value of `querystring_key` (what a form-style lookup sees),
/// trimmed and parsed as a signed integer. Integers too large for `i64` clamp
/// to `i64::MAX` / `i64::MIN`. Returns `default` when the key is missing or
/// the value is not a number.
///
/// ```
/// use simple_pagination::{Request, page_number_from_request};
///
/// assert_eq!(page_number_from_request(&Request::new("/?page=4"), "page", 1), 4);
/// assert_eq!(page_number_from_request(&Request::new("/?page=x"), "page", 1), 1);
/// assert_eq!(page_number_from_request(&Request::new("/"), "page", 2), 2);
/// ```
pub fn page_number_from_request(request: &Request, querystring_key: &str, default: i64) -> i64 {
    let Some(raw) = request.query_params().get_last(querystring_key) else {
        return default;
    };
    match raw.trim().parse::<i64>() {
        Ok(number) => number,
        // Still an integer, just past any page: let the paginator reject it.
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => i64::MAX,
        Err(err) if *err.kind() == IntErrorKind::NegOverflow => i64::MIN,
        Err(_) => {
            tracing::debug!(
                key = querystring_key,
                value = raw,
                default,
                "page number is not an integer, using default"
            );
            default
        },
    }
}
