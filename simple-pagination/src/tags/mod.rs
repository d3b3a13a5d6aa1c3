//! Pagination template tags.
//!
//! Three tags are understood:
//!
//! - `paginate` - paginates a collection from the context (see [`PaginateArgs`]
//!   for the argument grammar)
//! - `show_pages` - renders the page links of the last `paginate`
//! - `show_pageitems` - renders "Showing X to Y of Z items"
//!
//! Tags are parsed once with [`parse_tag`] and rendered any number of times
//! against a [`TemplateContext`].
//!
//! ```
//! use simple_pagination::{Request, TemplateContext, parse_tag};
//!
//! let paginate = parse_tag("paginate 10 entries").unwrap();
//! let show_items = parse_tag("show_pageitems").unwrap();
//!
//! let request = Request::new("/?page=3");
//! let mut ctx = TemplateContext::new(&request);
//! ctx.insert_collection("entries", (1..=42).collect::<Vec<u32>>());
//!
//! assert_eq!(paginate.render(&mut ctx).unwrap(), "");
//! assert_eq!(ctx.collection("entries").unwrap().first(), Some(&21));
//! assert_eq!(
//!     show_items.render(&mut ctx).unwrap(),
//!     "Showing 21 to 30 of 42 items"
//! );
//! ```

mod args;
mod context;
mod error;
mod nodes;

pub use args::{Arg, PaginateArgs};
pub use context::{PaginationData, TemplateContext};
pub use error::{RenderError, TagSyntaxError};
pub use nodes::{PaginateNode, ShowPageItemsNode, ShowPagesNode};

const PAGINATE: &str = "paginate";
const SHOW_PAGES: &str = "show_pages";
const SHOW_PAGEITEMS: &str = "show_pageitems";

/// A parsed pagination tag.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Node {
    /// `{% paginate ... %}`
    Paginate(PaginateNode),
    /// `{% show_pages %}`
    ShowPages(ShowPagesNode),
    /// `{% show_pageitems %}`
    ShowPageItems(ShowPageItemsNode),
}

impl Node {
    /// Tag name as written in templates.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Paginate(_) => PAGINATE,
            Self::ShowPages(_) => SHOW_PAGES,
            Self::ShowPageItems(_) => SHOW_PAGEITEMS,
        }
    }

    /// Run the tag against `ctx` and return its output.
    pub fn render<T: Clone>(&self, ctx: &mut TemplateContext<'_, T>) -> Result<String, RenderError> {
        match self {
            Self::Paginate(node) => node.render(ctx),
            Self::ShowPages(node) => node.render(ctx),
            Self::ShowPageItems(node) => node.render(ctx),
        }
    }
}

/// Parse the contents of a `{% ... %}` tag (without the delimiters).
///
/// # Errors
///
/// Returns [`TagSyntaxError`] for empty or unknown tags, `paginate` without
/// arguments or with arguments outside its grammar, and `show_pages` /
/// `show_pageitems` with arguments.
pub fn parse_tag(contents: &str) -> Result<Node, TagSyntaxError> {
    let contents = contents.trim();
    if contents.is_empty() {
        return Err(TagSyntaxError::EmptyTag);
    }
    let (name, args) = contents
        .split_once(char::is_whitespace)
        .unwrap_or((contents, ""));
    let args = args.trim();

    match name {
        PAGINATE => PaginateNode::parse(name, args).map(Node::Paginate),
        SHOW_PAGES => no_arguments(name, args).map(|()| Node::ShowPages(ShowPagesNode)),
        SHOW_PAGEITEMS => {
            no_arguments(name, args).map(|()| Node::ShowPageItems(ShowPageItemsNode))
        },
        _ => Err(TagSyntaxError::UnknownTag {
            tag: name.to_string(),
        }),
    }
}

fn no_arguments(tag: &str, args: &str) -> Result<(), TagSyntaxError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(TagSyntaxError::TakesNoArguments {
            tag: tag.to_string(),
        })
    }
}

#[cfg(test)]
mod tests;
