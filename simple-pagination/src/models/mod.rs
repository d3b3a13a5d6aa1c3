//! View objects rendered by the pagination tags.
//!
//! - [`PageLink`] - one navigation link
//! - [`PageList`] - every page of a collection, rendered as a link list
//! - [`ShowItems`] - "Showing X to Y of Z items"

mod page_link;
mod page_list;
mod show_items;

pub use page_link::PageLink;
pub use page_list::PageList;
pub use show_items::ShowItems;
