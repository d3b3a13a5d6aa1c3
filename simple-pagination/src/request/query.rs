//! Ordered, multi-valued query parameters.

use super::parsing::{url_decode, url_encode};
use crate::constants::{MAX_QUERY_PARAMS, MAX_URL_DECODED_LEN};

/// Query parameters in their original order.
///
/// Keys may repeat (`?tag=rust&tag=wasm`). Mutations keep the position of
/// the first occurrence of a key so rewritten links stay stable.
///
/// ```
/// use simple_pagination::QueryParams;
///
/// let mut params = QueryParams::parse("q=rust&page=2&tag=a&tag=b");
/// params.set("page", "3");
/// assert_eq!(params.to_query_string(), "q=rust&page=3&tag=a&tag=b");
///
/// params.remove("tag");
/// assert_eq!(params.to_query_string(), "q=rust&page=3");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter list.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Parse a raw query string (without the leading `?`).
    ///
    /// Pairs that fail to decode are dropped with a warning, as are pairs past
    /// `MAX_QUERY_PARAMS`. A key without `=` gets an empty value.
    pub fn parse(query: &str) -> Self {
        let mut pairs = Vec::new();
        let mut dropped_count = 0u32;
        let mut truncated = false;

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            if pairs.len() >= MAX_QUERY_PARAMS {
                truncated = true;
                break;
            }
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match (url_decode(key), url_decode(value)) {
                (Ok(key), Ok(value)) => pairs.push((key, value)),
                _ => dropped_count += 1,
            }
        }

        if truncated {
            tracing::warn!(
                max = MAX_QUERY_PARAMS,
                "query param limit exceeded: dropped remaining params"
            );
        }
        if dropped_count > 0 {
            tracing::warn!(
                dropped = dropped_count,
                max_len = MAX_URL_DECODED_LEN,
                "query param decode failed: dropped param(s)"
            );
        }

        Self { pairs }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Last value for `key`.
    ///
    /// This is the value a form-style lookup (`GET[key]`) sees when a key is
    /// repeated.
    pub fn get_last(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All values for `key`, in order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Replace every value of `key` with a single `value`.
    ///
    /// The new pair takes the position of the first existing occurrence, or
    /// is appended when `key` is absent.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(first) => {
                let mut index = 0;
                self.pairs.retain(|(k, _)| {
                    let keep = index <= first || k != key;
                    index += 1;
                    keep
                });
                if let Some(slot) = self.pairs.get_mut(first) {
                    slot.1 = value;
                }
            },
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    /// Append a value without touching existing ones.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Remove every value of `key`. Returns whether anything was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.pairs.len();
        self.pairs.retain(|(k, _)| k != key);
        self.pairs.len() != before
    }

    /// Number of pairs (repeated keys count once per value).
    pub const fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether there are no pairs at all.
    pub const fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over `(key, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encode as `k=v&k2=v2` (no leading `?`).
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", url_encode(k), url_encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
