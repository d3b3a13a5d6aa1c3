//! Page and PageSummary.

use super::Paginator;

/// One page of a [`Paginator`].
pub struct Page<'a, T> {
    number: usize,
    items: &'a [T],
    paginator: Paginator<'a, T>,
}

impl<T> Clone for Page<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Page<'_, T> {}

impl<T> std::fmt::Debug for Page<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("number", &self.number)
            .field("len", &self.items.len())
            .field("paginator", &self.paginator)
            .finish()
    }
}

impl<'a, T> Page<'a, T> {
    pub(super) const fn new(number: usize, items: &'a [T], paginator: Paginator<'a, T>) -> Self {
        Self {
            number,
            items,
            paginator,
        }
    }

    /// 1-based page number.
    #[inline]
    pub const fn number(&self) -> usize {
        self.number
    }

    /// Items on this page.
    #[inline]
    pub const fn object_list(&self) -> &'a [T] {
        self.items
    }

    /// The paginator this page belongs to.
    #[inline]
    pub const fn paginator(&self) -> &Paginator<'a, T> {
        &self.paginator
    }

    /// Number of items on this page.
    #[inline]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page holds no items (only possible for an empty collection).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a page follows this one.
    pub fn has_next(&self) -> bool {
        self.number < self.paginator.num_pages()
    }

    /// Whether a page precedes this one.
    pub const fn has_previous(&self) -> bool {
        self.number > 1
    }

    /// Whether the collection spans more than this page.
    pub fn has_other_pages(&self) -> bool {
        self.has_previous() || self.has_next()
    }

    /// Number of the next page, if any.
    pub fn next_page_number(&self) -> Option<usize> {
        self.has_next().then_some(self.number + 1)
    }

    /// Number of the previous page, if any.
    pub fn previous_page_number(&self) -> Option<usize> {
        self.has_previous().then(|| self.number - 1)
    }

    /// 1-based index of the first item on this page (0 for an empty collection).
    pub fn start_index(&self) -> usize {
        if self.paginator.count() == 0 {
            return 0;
        }
        if self.number == 1 {
            1
        } else {
            self.paginator.first_page_size() + (self.number - 2) * self.paginator.per_page() + 1
        }
    }

    /// 1-based index of the last item on this page (0 for an empty collection).
    pub fn end_index(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.start_index() + self.items.len() - 1
    }

    /// Detach the numbers of this page from the borrowed items.
    pub fn summary(&self) -> PageSummary {
        PageSummary {
            number: self.number,
            num_pages: self.paginator.num_pages(),
            count: self.paginator.count(),
            per_page: self.paginator.per_page(),
            start_index: self.start_index(),
            end_index: self.end_index(),
        }
    }
}

/// Owned numbers describing a page: what links and item counts are built from.
///
/// ```
/// use simple_pagination::Paginator;
///
/// let items: Vec<u8> = (0..42).collect();
/// let summary = Paginator::new(&items, 10).unwrap().page(5).unwrap().summary();
/// assert_eq!(summary.num_pages, 5);
/// assert_eq!((summary.start_index, summary.end_index), (41, 42));
/// assert!(!summary.has_next());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct PageSummary {
    /// 1-based page number.
    pub number: usize,
    /// Total number of pages.
    pub num_pages: usize,
    /// Total number of items.
    pub count: usize,
    /// Items per page.
    pub per_page: usize,
    /// 1-based index of the page's first item.
    pub start_index: usize,
    /// 1-based index of the page's last item.
    pub end_index: usize,
}

impl PageSummary {
    /// Whether a page follows this one.
    #[inline]
    pub const fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    /// Whether a page precedes this one.
    #[inline]
    pub const fn has_previous(&self) -> bool {
        self.number > 1
    }

    /// Number of the next page, if any.
    pub const fn next_page_number(&self) -> Option<usize> {
        if self.has_next() {
            Some(self.number + 1)
        } else {
            None
        }
    }

    /// Number of the previous page, if any.
    pub const fn previous_page_number(&self) -> Option<usize> {
        if self.has_previous() {
            Some(self.number - 1)
        } else {
            None
        }
    }
}
