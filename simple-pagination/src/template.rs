//! Minimal renderer for templates using the pagination tags.
//!
//! Literal text is copied through, `{% ... %}` tags run in order and
//! `{% load ... %}` is accepted and ignored. Nothing else is interpreted.
//!
//! ```
//! use simple_pagination::{Request, TemplateContext, render};
//!
//! let request = Request::new("/?page=2");
//! let mut ctx = TemplateContext::new(&request);
//! ctx.insert_collection("entries", (1..=25).collect::<Vec<u32>>());
//!
//! let out = render(
//!     "{% load paginate %}{% paginate entries %}<p>{% show_pageitems %}</p>",
//!     &mut ctx,
//! )
//! .unwrap();
//! assert_eq!(out, "<p>Showing 11 to 20 of 25 items</p>");
//! ```

use crate::tags::{Node, RenderError, TagSyntaxError, TemplateContext, parse_tag};

const TAG_OPEN: &str = "{%";
const TAG_CLOSE: &str = "%}";
const LOAD: &str = "load";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Tag(Node),
}

/// A compiled template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Compile `source`, parsing every tag up front.
    ///
    /// # Errors
    ///
    /// Returns [`TagSyntaxError`] for unterminated, empty or unknown tags and
    /// for tags with invalid arguments.
    pub fn compile(source: &str) -> Result<Self, TagSyntaxError> {
        let mut segments = Vec::new();
        let mut rest = source;
        let mut offset = 0;

        while let Some(open) = rest.find(TAG_OPEN) {
            if open > 0 {
                segments.push(Segment::Text(rest[..open].to_string()));
            }
            let after_open = &rest[open + TAG_OPEN.len()..];
            let close = after_open
                .find(TAG_CLOSE)
                .ok_or(TagSyntaxError::Unterminated {
                    position: offset + open,
                })?;

            let contents = after_open[..close].trim();
            if !is_load(contents) {
                segments.push(Segment::Tag(parse_tag(contents)?));
            }

            let consumed = open + TAG_OPEN.len() + close + TAG_CLOSE.len();
            offset += consumed;
            rest = &rest[consumed..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_string()));
        }

        Ok(Self { segments })
    }

    /// Number of tags, `load` excluded.
    pub fn tag_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Tag(_)))
            .count()
    }

    /// Render against `ctx`. Tags may update the context as they run.
    ///
    /// # Errors
    ///
    /// Stops at the first tag that fails and returns its [`RenderError`].
    pub fn render<T: Clone>(&self, ctx: &mut TemplateContext<'_, T>) -> Result<String, RenderError> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Tag(node) => out.push_str(&node.render(ctx)?),
            }
        }
        Ok(out)
    }
}

/// Compile and render `source` in one go.
///
/// # Errors
///
/// Syntax errors surface as [`RenderError::Syntax`].
pub fn render<T: Clone>(source: &str, ctx: &mut TemplateContext<'_, T>) -> Result<String, RenderError> {
    Template::compile(source)?.render(ctx)
}

fn is_load(contents: &str) -> bool {
    contents
        .split_whitespace()
        .next()
        .is_some_and(|name| name == LOAD)
}
