//! PageError enum.

/// Error type for paginator construction and page lookups.
///
/// Out-of-range lookups are recoverable: the `paginate` tag falls back to the
/// first page on [`PageError::LessThanOne`] and [`PageError::NoResults`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum PageError {
    /// A page size of zero was requested.
    #[error("page size must be at least 1")]
    ZeroPerPage,

    /// The page number is below 1.
    #[error("page number {number} is less than 1")]
    LessThanOne {
        /// The requested page number
        number: i64,
    },

    /// The page number is past the last page.
    #[error("page {number} contains no results (last page is {num_pages})")]
    NoResults {
        /// The requested page number
        number: i64,
        /// Total number of pages
        num_pages: usize,
    },
}

impl PageError {
    /// Whether the error comes from an out-of-range page number.
    #[inline]
    #[must_use]
    pub const fn is_empty_page(&self) -> bool {
        matches!(self, Self::LessThanOne { .. } | Self::NoResults { .. })
    }
}
