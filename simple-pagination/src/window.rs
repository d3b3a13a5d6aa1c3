//! Digg-style page window.
//!
//! The window decides *which* links a page list shows, not how they look:
//! it yields a sequence of [`PageToken`]s that [`crate::PageList`] turns into
//! markup.
//!
//! ```
//! use simple_pagination::{PageToken, page_numbers};
//!
//! assert_eq!(
//!     page_numbers(5, 10),
//!     vec![
//!         PageToken::First,
//!         PageToken::Previous,
//!         PageToken::Number(3),
//!         PageToken::Number(4),
//!         PageToken::Number(5),
//!         PageToken::Number(6),
//!         PageToken::Number(7),
//!         PageToken::Next,
//!         PageToken::Last,
//!     ]
//! );
//! ```

use crate::constants::{WINDOW_RADIUS, WINDOW_SIZE};

/// One entry of a rendered page list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PageToken {
    /// Arrow pointing at the first page.
    First,
    /// Link to the page before the current one.
    Previous,
    /// Numbered link.
    Number(usize),
    /// Link to the page after the current one.
    Next,
    /// Arrow pointing at the last page.
    Last,
    /// Gap between two runs of numbered links.
    Separator,
}

/// Signature of a page-list callable.
///
/// Takes the current page number and the total number of pages and returns
/// the tokens to display. [`page_numbers`] is the default.
///
/// ```
/// use simple_pagination::PageToken;
///
/// // previous, first, gap, current, last
/// fn compact(current: usize, _num_pages: usize) -> Vec<PageToken> {
///     vec![
///         PageToken::Previous,
///         PageToken::Number(1),
///         PageToken::Separator,
///         PageToken::Number(current),
///         PageToken::Last,
///     ]
/// }
///
/// let callable: simple_pagination::PageListFn = compact;
/// assert_eq!(callable(4, 9).len(), 5);
/// ```
pub type PageListFn = fn(usize, usize) -> Vec<PageToken>;

/// Produce a Digg-style pagination window.
///
/// Shows up to five numbered links centered on `current_page` (shifted to the
/// right near the first page, truncated near the last), preceded by
/// first/previous arrows unless on the first page and followed by next/last
/// arrows unless on the last page.
#[must_use]
pub fn page_numbers(current_page: usize, num_pages: usize) -> Vec<PageToken> {
    let start = current_page.saturating_sub(WINDOW_RADIUS).max(1);
    let end = (start + WINDOW_SIZE - 1).min(num_pages);

    let mut tokens = Vec::with_capacity(WINDOW_SIZE + 4);
    if current_page != 1 {
        tokens.push(PageToken::First);
        tokens.push(PageToken::Previous);
    }
    tokens.extend((start..=end).map(PageToken::Number));
    if current_page != num_pages {
        tokens.push(PageToken::Next);
        tokens.push(PageToken::Last);
    }
    tokens
}
