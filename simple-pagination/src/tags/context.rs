//! Render context shared by the pagination tags.

use crate::paginator::PageSummary;
use crate::request::Request;
use crate::settings::{Settings, settings};
use std::collections::HashMap;

/// State left behind by `paginate` for `show_pages` and `show_pageitems`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct PaginationData {
    /// Page whose links carry no page parameter.
    pub default_number: usize,
    /// Path used in links instead of the request path.
    pub override_path: Option<String>,
    /// The page being shown.
    pub page: PageSummary,
    /// Query parameter carrying the page number.
    pub querystring_key: String,
}

/// Everything a template render can see.
///
/// Scalar variables (page sizes, keys, paths) are strings; collections are
/// kept apart so `paginate` can slice them without conversions. After a
/// render, the items of the current page are available through
/// [`TemplateContext::collection`] under the tag's variable name.
///
/// ```
/// use simple_pagination::{Request, TemplateContext};
///
/// let request = Request::new("/?page=2");
/// let mut ctx = TemplateContext::new(&request);
/// ctx.insert_collection("entries", (1..=30).collect());
/// ctx.insert_var("size", "5");
///
/// assert_eq!(ctx.var("size"), Some("5"));
/// assert_eq!(ctx.collection("entries").map(<[i32]>::len), Some(30));
/// assert!(ctx.pagination().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct TemplateContext<'r, T> {
    request: &'r Request,
    settings: &'r Settings,
    variables: HashMap<String, String>,
    collections: HashMap<String, Vec<T>>,
    pagination: Option<PaginationData>,
}

impl<'r, T> TemplateContext<'r, T> {
    /// Empty context for `request`, using the process-wide [`settings()`].
    pub fn new(request: &'r Request) -> Self {
        Self {
            request,
            settings: settings(),
            variables: HashMap::new(),
            collections: HashMap::new(),
            pagination: None,
        }
    }

    /// Use explicit settings instead of the process-wide ones.
    #[must_use]
    pub fn with_settings(mut self, settings: &'r Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Set a scalar variable.
    pub fn insert_var(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(name.into(), value.into());
    }

    /// Set a collection, replacing any previous one of the same name.
    pub fn insert_collection(&mut self, name: impl Into<String>, items: Vec<T>) {
        self.collections.insert(name.into(), items);
    }

    /// Scalar variable by name.
    pub fn var(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// Collection by name. Dotted names are looked up as written.
    pub fn collection(&self, name: &str) -> Option<&[T]> {
        self.collections.get(name).map(Vec::as_slice)
    }

    /// Data stored by the last `paginate`, if any.
    pub const fn pagination(&self) -> Option<&PaginationData> {
        self.pagination.as_ref()
    }

    /// The request being rendered.
    pub const fn request(&self) -> &'r Request {
        self.request
    }

    /// Settings in effect.
    pub const fn settings(&self) -> &'r Settings {
        self.settings
    }

    pub(crate) fn set_pagination(&mut self, data: PaginationData) {
        self.pagination = Some(data);
    }
}
