//! The sequence of page links for one paginated collection.

use super::PageLink;
use crate::constants::{CLASS_DISABLED, CLASS_PAGINATION, SEPARATOR_TEXT};
use crate::paginator::PageSummary;
use crate::querystring::querystring_for_page;
use crate::request::{Request, iri_to_uri};
use crate::settings::{Settings, settings};
use crate::window::PageToken;
use maud::{Markup, Render, html};

/// All pages of a paginated collection, as links.
///
/// Indexing is 1-based and the length is the number of pages. Rendering
/// produces a Digg-style window (or whatever the configured page-list
/// callable returns) and renders nothing when there is a single page.
///
/// ```
/// use simple_pagination::{PageList, Paginator, Request};
///
/// let items: Vec<u32> = (0..50).collect();
/// let page = Paginator::new(&items, 10).unwrap().page(2).unwrap().summary();
/// let request = Request::new("/blog/?page=2&tag=rust");
///
/// let pages = PageList::new(&request, page, "page");
/// assert_eq!(pages.len(), 5);
/// assert_eq!(pages.current().path, "/blog/?page=2&tag=rust");
/// assert_eq!(pages.first(None).path, "/blog/?tag=rust");
/// assert_eq!(pages.next().unwrap().number, 3);
/// ```
#[derive(Debug, Clone)]
pub struct PageList<'r> {
    request: &'r Request,
    page: PageSummary,
    querystring_key: String,
    default_number: usize,
    override_path: Option<String>,
    settings: &'r Settings,
}

impl<'r> PageList<'r> {
    /// Page list for `page`, linking through `querystring_key`.
    ///
    /// Uses the process-wide [`settings()`] for labels and the page-list
    /// callable; see [`PageList::with_settings`].
    pub fn new(request: &'r Request, page: PageSummary, querystring_key: impl Into<String>) -> Self {
        Self {
            request,
            page,
            querystring_key: querystring_key.into(),
            default_number: 1,
            override_path: None,
            settings: settings(),
        }
    }

    /// Page whose links carry no page parameter (1 unless told otherwise).
    #[must_use]
    pub fn with_default_number(mut self, default_number: usize) -> Self {
        self.default_number = default_number;
        self
    }

    /// Link to `path` instead of the request path.
    #[must_use]
    pub fn with_override_path(mut self, path: impl Into<String>) -> Self {
        self.override_path = Some(path.into());
        self
    }

    /// Use explicit settings instead of the process-wide ones.
    #[must_use]
    pub fn with_settings(mut self, settings: &'r Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Total number of pages.
    #[inline]
    pub const fn len(&self) -> usize {
        self.page.num_pages
    }

    /// Always false: there is at least one page.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.page.num_pages == 0
    }

    /// Whether there is more than one page.
    #[inline]
    pub const fn paginated(&self) -> bool {
        self.len() > 1
    }

    /// Link to page `number`, if it exists.
    pub fn get(&self, number: usize) -> Option<PageLink> {
        (1..=self.len())
            .contains(&number)
            .then(|| self.link(number, None))
    }

    /// Links to every page, first to last.
    pub fn iter(&self) -> impl Iterator<Item = PageLink> + '_ {
        (1..=self.len()).map(|number| self.link(number, None))
    }

    /// Link to the page being displayed.
    pub fn current(&self) -> PageLink {
        self.link(self.page.number, None)
    }

    /// 1-based index of the first item on the current page.
    #[inline]
    pub const fn current_start_index(&self) -> usize {
        self.page.start_index
    }

    /// 1-based index of the last item on the current page.
    #[inline]
    pub const fn current_end_index(&self) -> usize {
        self.page.end_index
    }

    /// Total number of items across all pages.
    #[inline]
    pub const fn total_count(&self) -> usize {
        self.page.count
    }

    /// Link to the first page, optionally with a custom label.
    pub fn first(&self, label: Option<&str>) -> PageLink {
        self.link(1, label)
    }

    /// Link to the last page, optionally with a custom label.
    pub fn last(&self, label: Option<&str>) -> PageLink {
        self.link(self.len(), label)
    }

    /// Link to the first page labelled with the first-page arrow.
    pub fn first_as_arrow(&self) -> PageLink {
        self.first(Some(&self.settings.first_label))
    }

    /// Link to the last page labelled with the last-page arrow.
    pub fn last_as_arrow(&self) -> PageLink {
        self.last(Some(&self.settings.last_label))
    }

    /// Link to the previous page, or `None` on the first page.
    pub fn previous(&self) -> Option<PageLink> {
        self.page
            .previous_page_number()
            .map(|number| self.link(number, Some(&self.settings.previous_label)))
    }

    /// Link to the next page, or `None` on the last page.
    pub fn next(&self) -> Option<PageLink> {
        self.page
            .next_page_number()
            .map(|number| self.link(number, Some(&self.settings.next_label)))
    }

    /// Resolve the page-list callable's tokens into links.
    ///
    /// `None` entries are separators. Tokens that point nowhere (previous on
    /// the first page, numbers out of range) are skipped.
    pub fn links(&self) -> Vec<Option<PageLink>> {
        let tokens = (self.settings.page_list_fn())(self.page.number, self.len());
        tokens
            .into_iter()
            .filter_map(|token| match token {
                PageToken::Separator => Some(None),
                PageToken::Previous => self.previous().map(Some),
                PageToken::Next => self.next().map(Some),
                PageToken::First => Some(Some(self.first_as_arrow())),
                PageToken::Last => Some(Some(self.last_as_arrow())),
                PageToken::Number(number) => self.get(number).map(Some),
            })
            .collect()
    }

    /// Rendered links as a JSON array (`null` for separators).
    ///
    /// Empty when there is a single page, like the HTML rendering.
    pub fn to_json(&self) -> String {
        let links = if self.paginated() {
            self.links()
        } else {
            Vec::new()
        };
        miniserde::json::to_string(&links)
    }

    /// Render as an HTML string.
    pub fn to_html(&self) -> String {
        self.render().into_string()
    }

    fn link(&self, number: usize, label: Option<&str>) -> PageLink {
        let url = querystring_for_page(
            self.request.query_params(),
            number,
            &self.querystring_key,
            self.default_number,
        );
        let base = self
            .override_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .unwrap_or_else(|| self.request.path_without_query());
        let path = format!("{}{url}", iri_to_uri(base));

        PageLink {
            number,
            label: label.map_or_else(|| number.to_string(), str::to_string),
            querystring_key: self.querystring_key.clone(),
            is_current: number == self.page.number,
            is_first: number == 1,
            is_last: number == self.len(),
            url,
            path,
        }
    }
}

impl Render for PageList<'_> {
    fn render(&self) -> Markup {
        if !self.paginated() {
            return html! {};
        }
        html! {
            ul class=(CLASS_PAGINATION) {
                @for link in self.links() {
                    @match link {
                        Some(link) => {
                            (link)
                        },
                        None => {
                            li class=(CLASS_DISABLED) { span { (SEPARATOR_TEXT) } }
                        },
                    }
                }
            }
        }
    }
}

impl std::fmt::Display for PageList<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_html())
    }
}
