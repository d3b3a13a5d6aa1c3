//! Offset pagination over an in-memory collection.
//!
//! # Example
//!
//! ```
//! use simple_pagination::Paginator;
//!
//! let items: Vec<u32> = (1..=25).collect();
//! let paginator = Paginator::new(&items, 10).unwrap();
//! assert_eq!(paginator.num_pages(), 3);
//!
//! let page = paginator.page(3).unwrap();
//! assert_eq!(page.object_list(), &[21, 22, 23, 24, 25]);
//! assert_eq!((page.start_index(), page.end_index()), (21, 25));
//! assert!(!page.has_next());
//! ```
//!
//! A different size for the first page is supported, which is handy when the
//! first page carries a header or a featured item:
//!
//! ```
//! use simple_pagination::Paginator;
//!
//! let items: Vec<u32> = (1..=23).collect();
//! let paginator = Paginator::new(&items, 10).unwrap().with_first_page(3).unwrap();
//! assert_eq!(paginator.num_pages(), 3);
//! assert_eq!(paginator.page(2).unwrap().object_list().first(), Some(&4));
//! ```

mod error;
mod page;

pub use error::PageError;
pub use page::{Page, PageSummary};

use std::num::NonZeroUsize;
use std::ops::RangeInclusive;

/// Splits a borrowed slice into numbered pages.
///
/// There is always at least one page; an empty collection has a single empty
/// first page.
pub struct Paginator<'a, T> {
    items: &'a [T],
    per_page: NonZeroUsize,
    first_page: Option<NonZeroUsize>,
}

// Manual impls: the paginator only borrows `T`, so no `T: Clone` bound.
impl<T> Clone for Paginator<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Paginator<'_, T> {}

impl<T> std::fmt::Debug for Paginator<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator")
            .field("count", &self.items.len())
            .field("per_page", &self.per_page)
            .field("first_page", &self.first_page)
            .finish()
    }
}

impl<'a, T> Paginator<'a, T> {
    /// Paginate `items` with `per_page` items on every page.
    pub fn new(items: &'a [T], per_page: usize) -> Result<Self, PageError> {
        let per_page = NonZeroUsize::new(per_page).ok_or(PageError::ZeroPerPage)?;
        Ok(Self {
            items,
            per_page,
            first_page: None,
        })
    }

    /// Use a different number of items on the first page.
    pub fn with_first_page(mut self, first_page: usize) -> Result<Self, PageError> {
        self.first_page = Some(NonZeroUsize::new(first_page).ok_or(PageError::ZeroPerPage)?);
        Ok(self)
    }

    /// Total number of items across all pages.
    #[inline]
    pub const fn count(&self) -> usize {
        self.items.len()
    }

    /// Number of items on every page but (possibly) the first.
    #[inline]
    pub const fn per_page(&self) -> usize {
        self.per_page.get()
    }

    /// Number of items on the first page.
    #[inline]
    pub fn first_page_size(&self) -> usize {
        self.first_page.unwrap_or(self.per_page).get()
    }

    /// Total number of pages (at least 1).
    pub fn num_pages(&self) -> usize {
        let first = self.first_page_size();
        let count = self.count();
        if count <= first {
            1
        } else {
            1 + (count - first).div_ceil(self.per_page())
        }
    }

    /// 1-based range of valid page numbers.
    pub fn page_range(&self) -> RangeInclusive<usize> {
        1..=self.num_pages()
    }

    /// Check that `number` names an existing page.
    pub fn validate_number(&self, number: i64) -> Result<usize, PageError> {
        if number < 1 {
            return Err(PageError::LessThanOne { number });
        }
        let num_pages = self.num_pages();
        match usize::try_from(number) {
            Ok(valid) if valid <= num_pages => Ok(valid),
            _ => Err(PageError::NoResults { number, num_pages }),
        }
    }

    /// Get page `number` (1-based).
    pub fn page(&self, number: i64) -> Result<Page<'a, T>, PageError> {
        let number = self.validate_number(number)?;
        let (start, end) = self.bounds(number);
        let items = self.items.get(start..end).unwrap_or_default();
        Ok(Page::new(number, items, *self))
    }

    /// Item offsets `[start, end)` of a valid page number.
    fn bounds(&self, number: usize) -> (usize, usize) {
        let first = self.first_page_size();
        let start = if number <= 1 {
            0
        } else {
            first + (number - 2) * self.per_page()
        };
        let size = if number <= 1 { first } else { self.per_page() };
        let count = self.count();
        (start.min(count), (start + size).min(count))
    }
}

/// Turn a possibly negative page index into a valid page number.
///
/// Negative indexes count back from the last page (`-1` is the last page,
/// `-2` the one before). Indexes that point outside `1..=num_pages` in either
/// direction fall back to page 1.
///
/// ```
/// use simple_pagination::normalize_page_number;
///
/// assert_eq!(normalize_page_number(-1, 5), 5);
/// assert_eq!(normalize_page_number(-5, 5), 1);
/// assert_eq!(normalize_page_number(-6, 5), 1);
/// assert_eq!(normalize_page_number(3, 5), 3);
/// ```
pub fn normalize_page_number(page_number: i64, num_pages: usize) -> usize {
    let resolved = if page_number < 0 {
        usize::try_from(page_number.unsigned_abs())
            .ok()
            .and_then(|back| num_pages.checked_sub(back))
            .map(|zero_based| zero_based + 1)
    } else {
        usize::try_from(page_number).ok()
    };
    match resolved {
        Some(number) if (1..=num_pages).contains(&number) => number,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_per_page_is_rejected() {
        let items = [1, 2, 3];
        assert_eq!(Paginator::new(&items, 0).unwrap_err(), PageError::ZeroPerPage);
        assert_eq!(
            Paginator::new(&items, 2).unwrap().with_first_page(0).unwrap_err(),
            PageError::ZeroPerPage
        );
    }

    #[test]
    fn test_num_pages() {
        let items: Vec<usize> = (0..100).collect();
        assert_eq!(Paginator::new(&items, 10).unwrap().num_pages(), 10);
        assert_eq!(Paginator::new(&items, 20).unwrap().num_pages(), 5);
        assert_eq!(Paginator::new(&items, 30).unwrap().num_pages(), 4);
        assert_eq!(Paginator::new(&items, 1000).unwrap().num_pages(), 1);
    }

    #[test]
    fn test_empty_collection_has_one_page() {
        let items: [u8; 0] = [];
        let paginator = Paginator::new(&items, 10).unwrap();
        assert_eq!(paginator.num_pages(), 1);
        assert_eq!(paginator.page_range(), 1..=1);

        let page = paginator.page(1).unwrap();
        assert!(page.is_empty());
        assert_eq!((page.start_index(), page.end_index()), (0, 0));
    }

    #[test]
    fn test_out_of_range_pages() {
        let items: Vec<usize> = (0..15).collect();
        let paginator = Paginator::new(&items, 10).unwrap();

        assert_eq!(
            paginator.page(0).unwrap_err(),
            PageError::LessThanOne { number: 0 }
        );
        assert_eq!(
            paginator.page(-3).unwrap_err(),
            PageError::LessThanOne { number: -3 }
        );
        assert_eq!(
            paginator.page(3).unwrap_err(),
            PageError::NoResults {
                number: 3,
                num_pages: 2
            }
        );
        assert!(paginator.page(3).unwrap_err().is_empty_page());
        assert!(!PageError::ZeroPerPage.is_empty_page());
    }

    #[test]
    fn test_page_slices() {
        let items: Vec<usize> = (1..=25).collect();
        let paginator = Paginator::new(&items, 10).unwrap();

        assert_eq!(paginator.page(1).unwrap().object_list(), &items[0..10]);
        assert_eq!(paginator.page(2).unwrap().object_list(), &items[10..20]);
        assert_eq!(paginator.page(3).unwrap().object_list(), &items[20..25]);
    }

    #[test]
    fn test_first_page_size() {
        let items: Vec<usize> = (1..=23).collect();
        let paginator = Paginator::new(&items, 10).unwrap().with_first_page(3).unwrap();

        assert_eq!(paginator.first_page_size(), 3);
        assert_eq!(paginator.num_pages(), 3);
        assert_eq!(paginator.page(1).unwrap().object_list(), &[1, 2, 3]);
        assert_eq!(paginator.page(2).unwrap().object_list(), &items[3..13]);
        assert_eq!(paginator.page(3).unwrap().object_list(), &items[13..23]);

        let last = paginator.page(3).unwrap();
        assert_eq!((last.start_index(), last.end_index()), (14, 23));
    }

    #[test]
    fn test_first_page_larger_than_collection() {
        let items = [1, 2];
        let paginator = Paginator::new(&items, 10).unwrap().with_first_page(5).unwrap();
        assert_eq!(paginator.num_pages(), 1);
        assert_eq!(paginator.page(1).unwrap().len(), 2);
    }

    #[test]
    fn test_normalize_page_number() {
        assert_eq!(normalize_page_number(-1, 10), 10);
        assert_eq!(normalize_page_number(-2, 10), 9);
        assert_eq!(normalize_page_number(-10, 10), 1);
        assert_eq!(normalize_page_number(-11, 10), 1);
        assert_eq!(normalize_page_number(i64::MIN, 10), 1);
    }

    #[test]
    fn test_normalize_page_number_positive_and_zero() {
        assert_eq!(normalize_page_number(1, 2), 1);
        assert_eq!(normalize_page_number(2, 2), 2);
        assert_eq!(normalize_page_number(3, 2), 1);
        assert_eq!(normalize_page_number(0, 2), 1);
        assert_eq!(normalize_page_number(-1, 0), 1);
    }
}
