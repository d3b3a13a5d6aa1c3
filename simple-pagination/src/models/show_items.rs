//! "Showing X to Y of Z items" summary.

use crate::paginator::PageSummary;

/// Item-count summary of the current page.
///
/// ```
/// use simple_pagination::{Paginator, ShowItems};
///
/// let items: Vec<u32> = (0..95).collect();
/// let page = Paginator::new(&items, 20).unwrap().page(5).unwrap();
/// assert_eq!(
///     ShowItems::new(page.summary()).to_string(),
///     "Showing 81 to 95 of 95 items"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowItems {
    page: PageSummary,
}

impl ShowItems {
    /// Summary for `page`.
    pub const fn new(page: PageSummary) -> Self {
        Self { page }
    }
}

impl std::fmt::Display for ShowItems {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Showing {} to {} of {} items",
            self.page.start_index, self.page.end_index, self.page.count
        )
    }
}

impl maud::Render for ShowItems {
    fn render_to(&self, buffer: &mut String) {
        buffer.push_str(&self.to_string());
    }
}
