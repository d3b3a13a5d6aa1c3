//! Centralized constants for the simple-pagination crate.
//!
//! All defaults, limits, and environment variable names are defined here for
//! easy tuning and consistent behavior across the crate.
//!
//! # Environment Variables
//!
//! The defaults below can be overridden per process (see [`crate::settings`]):
//!
//! | Variable                           | Default                                    |
//! |------------------------------------|--------------------------------------------|
//! | `SIMPLE_PAGINATION_PER_PAGE`       | `10`                                       |
//! | `SIMPLE_PAGINATION_PAGE_LABEL`     | `page`                                     |
//! | `SIMPLE_PAGINATION_NEXT_LABEL`     | `<span aria-hidden="true">&gt;</span>`     |
//! | `SIMPLE_PAGINATION_PREVIOUS_LABEL` | `<span aria-hidden="true">&lt;</span>`     |
//! | `SIMPLE_PAGINATION_LAST_LABEL`     | `<span aria-hidden="true">&gt;&gt;</span>` |
//! | `SIMPLE_PAGINATION_FIRST_LABEL`    | `<span aria-hidden="true">&lt;&lt;</span>` |
//!
//! ## Example
//!
//! ```bash
//! # 25 items per page, pages carried in ?p=
//! SIMPLE_PAGINATION_PER_PAGE=25
//! SIMPLE_PAGINATION_PAGE_LABEL=p
//! ```

// ============================================================================
// DEFAULTS
// ============================================================================

/// Default number of items per page.
pub const DEFAULT_PER_PAGE: usize = 10;

/// Default query parameter carrying the page number.
pub const DEFAULT_PAGE_LABEL: &str = "page";

/// Default label of the "next page" link.
pub const DEFAULT_NEXT_LABEL: &str = r#"<span aria-hidden="true">&gt;</span>"#;

/// Default label of the "previous page" link.
pub const DEFAULT_PREVIOUS_LABEL: &str = r#"<span aria-hidden="true">&lt;</span>"#;

/// Default label of the "last page" arrow.
pub const DEFAULT_LAST_LABEL: &str = r#"<span aria-hidden="true">&gt;&gt;</span>"#;

/// Default label of the "first page" arrow.
pub const DEFAULT_FIRST_LABEL: &str = r#"<span aria-hidden="true">&lt;&lt;</span>"#;

/// Page shown when neither the tag nor the request names one.
pub const DEFAULT_PAGE_NUMBER: i64 = 1;

// ============================================================================
// ENVIRONMENT VARIABLES
// ============================================================================

/// Overrides [`DEFAULT_PER_PAGE`].
pub const ENV_PER_PAGE: &str = "SIMPLE_PAGINATION_PER_PAGE";

/// Overrides [`DEFAULT_PAGE_LABEL`].
pub const ENV_PAGE_LABEL: &str = "SIMPLE_PAGINATION_PAGE_LABEL";

/// Overrides [`DEFAULT_NEXT_LABEL`].
pub const ENV_NEXT_LABEL: &str = "SIMPLE_PAGINATION_NEXT_LABEL";

/// Overrides [`DEFAULT_PREVIOUS_LABEL`].
pub const ENV_PREVIOUS_LABEL: &str = "SIMPLE_PAGINATION_PREVIOUS_LABEL";

/// Overrides [`DEFAULT_LAST_LABEL`].
pub const ENV_LAST_LABEL: &str = "SIMPLE_PAGINATION_LAST_LABEL";

/// Overrides [`DEFAULT_FIRST_LABEL`].
pub const ENV_FIRST_LABEL: &str = "SIMPLE_PAGINATION_FIRST_LABEL";

// ============================================================================
// QUERY STRING
// ============================================================================

/// Query parameter that is always stripped from generated page links.
///
/// Templates sometimes forward the key itself under this name; it must never
/// leak into navigation URLs.
pub const RESERVED_QUERYSTRING_KEY: &str = "querystring_key";

/// Maximum decoded URL length (64KB).
/// Prevents DoS via extremely long encoded URLs.
pub const MAX_URL_DECODED_LEN: usize = 65536;

/// Maximum number of query parameters kept from a request.
pub const MAX_QUERY_PARAMS: usize = 1000;

// ============================================================================
// PAGE WINDOW
// ============================================================================

/// Pages shown on each side of the current page in the Digg-style window.
pub const WINDOW_RADIUS: usize = 2;

/// Number of numbered links in a full window (current page included).
pub const WINDOW_SIZE: usize = 2 * WINDOW_RADIUS + 1;

// ============================================================================
// MARKUP
// ============================================================================

/// CSS class of the `<ul>` wrapping the rendered page list.
pub const CLASS_PAGINATION: &str = "pagination";

/// CSS class of the current page's `<li>`.
pub const CLASS_ACTIVE: &str = "active";

/// CSS class of separator items.
pub const CLASS_DISABLED: &str = "disabled";

/// Text shown for a separator token.
pub const SEPARATOR_TEXT: &str = "...";
