// =============================================================================
// CRATE-LEVEL QUALITY LINTS
// =============================================================================
#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]
#![warn(unreachable_pub)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
// =============================================================================
// CLIPPY CONFIGURATION
// =============================================================================
#![allow(clippy::doc_markdown)] // Tag names in docs
#![allow(clippy::return_self_not_must_use)] // Builder pattern returns Self by design
#![allow(clippy::missing_errors_doc)] // # Errors sections - doc-heavy
#![allow(clippy::missing_panics_doc)] // # Panics sections - doc-heavy
#![allow(clippy::match_same_arms)] // Intentional for clarity
// Template scanning slices at offsets returned by `find`
#![allow(clippy::indexing_slicing)]

//! simple-pagination - Digg-style pagination for server-side templates
//!
//! # Overview
//!
//! Given a collection, a page size and the current request, this crate works
//! out which page to show, slices the collection, and renders the page links
//! and the "Showing X to Y of Z items" summary. Links keep every other query
//! parameter of the request.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  template   {% paginate %} {% show_pages %} ...          │
//! │    └─ tags  argument grammar, nodes, render context     │
//! └─────────────────────────────────────────────────────────┘
//!                           ↓ builds
//! ┌─────────────────────────────────────────────────────────┐
//! │  models     PageList / PageLink / ShowItems (maud HTML)  │
//! │    ├─ window       which page numbers to show           │
//! │    └─ querystring  link query strings, page lookup      │
//! └─────────────────────────────────────────────────────────┘
//!                           ↓ over
//! ┌─────────────────────────────────────────────────────────┐
//! │  paginator  Paginator / Page / PageSummary               │
//! │  request    path + query parameters                     │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```
//! use simple_pagination::prelude::*;
//!
//! let request = Request::new("/articles/?tag=rust&page=2");
//! let mut ctx = TemplateContext::new(&request);
//! ctx.insert_collection("articles", (1..=45).collect::<Vec<u32>>());
//!
//! let html = render(
//!     "{% load paginate %}{% paginate 10 articles %}{% show_pageitems %}",
//!     &mut ctx,
//! )
//! .unwrap();
//! assert_eq!(html, "Showing 11 to 20 of 45 items");
//! assert_eq!(ctx.collection("articles").unwrap().len(), 10);
//! ```
//!
//! # Without templates
//!
//! The building blocks work on their own:
//!
//! ```
//! use simple_pagination::{PageList, Paginator, Request, page_number_from_request};
//!
//! let items: Vec<u32> = (0..95).collect();
//! let request = Request::new("/list?page=3");
//!
//! let number = page_number_from_request(&request, "page", 1);
//! let page = Paginator::new(&items, 10).unwrap().page(number).unwrap();
//! assert_eq!(page.object_list().first(), Some(&20));
//!
//! let pages = PageList::new(&request, page.summary(), "page");
//! assert_eq!(pages.previous().unwrap().path, "/list?page=2");
//! assert_eq!(pages.first(None).path, "/list");
//! ```
//!
//! # Tags
//!
//! - `paginate [[FIRST,]PER_PAGE] OBJECTS [starting from page N] [using KEY]
//!   [with PATH] [as NAME]` - see [`PaginateArgs`]
//! - `show_pages` - page links as `<ul class="pagination">`
//! - `show_pageitems` - "Showing X to Y of Z items"
//!
//! # Configuration
//!
//! Defaults (page size, query parameter, arrow labels) come from [`Settings`],
//! which reads `SIMPLE_PAGINATION_*` environment variables once per process.
//!
//! # Logging
//!
//! Recoverable oddities (dropped query parameters, invalid settings, page
//! fallbacks) are reported as [`tracing`] events. No subscriber is installed.

pub mod constants;
mod models;
mod paginator;
mod querystring;
mod request;
mod settings;
mod tags;
mod template;
mod window;

pub use models::{PageLink, PageList, ShowItems};
pub use paginator::{Page, PageError, PageSummary, Paginator, normalize_page_number};
pub use querystring::{page_number_from_request, querystring_for_page};
pub use request::{DecodeError, QueryParams, Request, iri_to_uri, url_decode, url_encode};
pub use settings::{Settings, settings};
pub use tags::{
    Arg, Node, PaginateArgs, PaginateNode, PaginationData, RenderError, ShowPageItemsNode,
    ShowPagesNode, TagSyntaxError, TemplateContext, parse_tag,
};
pub use template::{Template, render};
pub use window::{PageListFn, PageToken, page_numbers};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use simple_pagination::prelude::*;
/// ```
///
/// This imports:
/// - [`Request`] - path and query parameters of the current request
/// - [`Paginator`], [`Page`] - slicing a collection into pages
/// - [`PageList`], [`ShowItems`] - rendered view objects
/// - [`Settings`] - labels, page size and page-list callable
/// - [`TemplateContext`], [`Template`], [`render`] - the tag renderer
pub mod prelude {
    pub use crate::models::{PageLink, PageList, ShowItems};
    pub use crate::paginator::{Page, PageError, PageSummary, Paginator};
    pub use crate::request::{QueryParams, Request};
    pub use crate::settings::Settings;
    pub use crate::tags::{RenderError, TagSyntaxError, TemplateContext};
    pub use crate::template::{Template, render};
    pub use crate::window::PageToken;
}

// ============================================================================
// API Contract Tests (compile-time assertions)
// ============================================================================
