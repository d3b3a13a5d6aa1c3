//! A single navigation link.

use crate::constants::CLASS_ACTIVE;
use maud::{Markup, PreEscaped, Render, html};

/// A page link as shown in a page list.
///
/// Built by [`crate::PageList`]; see [`crate::PageList::get`].
#[derive(Debug, Clone, PartialEq, Eq, miniserde::Serialize)]
#[non_exhaustive]
pub struct PageLink {
    /// Page number the link points at.
    pub number: usize,
    /// Link label (trusted markup; usually the page number).
    pub label: String,
    /// Query parameter carrying the page number.
    pub querystring_key: String,
    /// Whether this is the page being displayed.
    pub is_current: bool,
    /// Whether this is the first page.
    pub is_first: bool,
    /// Whether this is the last page.
    pub is_last: bool,
    /// Query string of the link (`""` or starting with `?`).
    pub url: String,
    /// Full link target: path plus [`PageLink::url`].
    pub path: String,
}

impl PageLink {
    /// Render as an HTML string.
    pub fn to_html(&self) -> String {
        self.render().into_string()
    }
}

impl Render for PageLink {
    fn render(&self) -> Markup {
        html! {
            li class=[self.is_current.then_some(CLASS_ACTIVE)] {
                a href=(self.path) { (PreEscaped(&self.label)) }
            }
        }
    }
}

impl std::fmt::Display for PageLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_html())
    }
}
