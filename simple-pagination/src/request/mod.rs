//! Request view used by the pagination tags.
//!
//! Only the parts of an HTTP request that pagination needs are modeled: the
//! path (for link targets) and the query string (for the current page and for
//! the parameters that page links must preserve).

mod parsing;
mod query;

pub use parsing::{DecodeError, iri_to_uri, url_decode, url_encode};
pub use query::QueryParams;

use std::cell::OnceCell;

/// Incoming request as seen by a template.
///
/// Build it from the request target (path plus optional query string):
///
/// ```
/// use simple_pagination::Request;
///
/// let req = Request::new("/articles/?page=2&q=rust+lang");
/// assert_eq!(req.path_without_query(), "/articles/");
/// assert_eq!(req.query("page"), Some("2"));
/// assert_eq!(req.query("q"), Some("rust lang"));
/// ```
#[non_exhaustive]
pub struct Request {
    path: String,
    /// Query parameters, parsed on first access.
    query_cache: OnceCell<QueryParams>,
}

impl std::fmt::Debug for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Request")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl Request {
    /// Create a request from its target, e.g. `/users/?page=2`.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query_cache: OnceCell::new(),
        }
    }

    /// Create a request from a path and already parsed query parameters.
    #[must_use]
    pub fn with_query(path: impl Into<String>, query: QueryParams) -> Self {
        let mut path = path.into();
        if let Some(query_start) = path.find('?') {
            path.truncate(query_start);
        }
        Self {
            path,
            query_cache: OnceCell::from(query),
        }
    }

    /// Full request target including query string (e.g. "/users/?page=1").
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Just the path portion without query string (e.g. "/users/").
    #[inline]
    pub fn path_without_query(&self) -> &str {
        self.path.split('?').next().unwrap_or(&self.path)
    }

    /// First value of a query parameter.
    ///
    /// For path `/users?page=2&limit=10`, `query("page")` returns `Some("2")`.
    pub fn query(&self, name: &str) -> Option<&str> {
        self.query_params().get(name)
    }

    /// All values of a query parameter.
    ///
    /// ```
    /// # use simple_pagination::Request;
    /// let req = Request::new("/search?tag=rust&tag=wasm");
    /// assert_eq!(req.query_all("tag"), vec!["rust", "wasm"]);
    /// ```
    pub fn query_all(&self, name: &str) -> Vec<&str> {
        self.query_params().get_all(name)
    }

    /// All query parameters, in order.
    pub fn query_params(&self) -> &QueryParams {
        self.query_cache.get_or_init(|| {
            self.path
                .split_once('?')
                .map_or_else(QueryParams::new, |(_, query)| QueryParams::parse(query))
        })
    }
}

#[cfg(test)]
mod tests;
