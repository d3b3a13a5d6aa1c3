//! Executable tag nodes.

use super::args::{Arg, PaginateArgs};
use super::context::{PaginationData, TemplateContext};
use super::error::{RenderError, TagSyntaxError};
use crate::models::{PageList, ShowItems};
use crate::paginator::{Paginator, normalize_page_number};
use crate::querystring::page_number_from_request;
use std::str::FromStr;

/// `{% paginate ... %}`: slices a collection down to the requested page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginateNode {
    args: PaginateArgs,
}

impl PaginateNode {
    /// Parse the tag's arguments.
    pub fn parse(tag: &str, args: &str) -> Result<Self, TagSyntaxError> {
        PaginateArgs::parse(tag, args).map(|args| Self { args })
    }

    /// Parsed arguments.
    pub const fn args(&self) -> &PaginateArgs {
        &self.args
    }

    /// Paginate the collection, store the page's items under the tag's
    /// variable name and record the pagination data. Renders nothing.
    ///
    /// A requested page outside the page range shows page 1.
    pub fn render<T: Clone>(&self, ctx: &mut TemplateContext<'_, T>) -> Result<String, RenderError> {
        let args = &self.args;
        let settings = ctx.settings();

        let default = resolve_number(ctx, &args.number)?;
        let per_page = match &args.per_page {
            Some(arg) => resolve_number(ctx, arg)?,
            None => settings.per_page,
        };
        let first_page = args
            .first_page
            .as_ref()
            .map(|arg| resolve_number(ctx, arg))
            .transpose()?;
        let querystring_key = match &args.querystring_key {
            Some(arg) => resolve_text(ctx, arg)?,
            None => settings.page_label.clone(),
        };
        let override_path = args
            .override_path
            .as_ref()
            .map(|arg| resolve_text(ctx, arg))
            .transpose()?;

        let objects = ctx
            .collection(&args.objects)
            .ok_or_else(|| RenderError::MissingVariable {
                name: args.objects.clone(),
            })?;
        let mut paginator = Paginator::new(objects, per_page)?;
        if let Some(first_page) = first_page {
            paginator = paginator.with_first_page(first_page)?;
        }

        let default_number = if default < 0 {
            normalize_page_number(default, paginator.num_pages())
        } else {
            usize::try_from(default).unwrap_or(usize::MAX)
        };
        let requested = page_number_from_request(
            ctx.request(),
            &querystring_key,
            i64::try_from(default_number).unwrap_or(i64::MAX),
        );

        let page = match paginator.page(requested) {
            Ok(page) => page,
            Err(err) if err.is_empty_page() => {
                tracing::debug!(requested, error = %err, "page out of range, showing page 1");
                paginator.page(1)?
            },
            Err(err) => return Err(err.into()),
        };
        let items = page.object_list().to_vec();
        let summary = page.summary();

        ctx.insert_collection(args.var_name.clone(), items);
        ctx.set_pagination(PaginationData {
            default_number,
            override_path,
            page: summary,
            querystring_key,
        });
        Ok(String::new())
    }
}

/// `{% show_pages %}`: the page links of the last `paginate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub struct ShowPagesNode;

impl ShowPagesNode {
    /// Render the page list as HTML.
    pub fn render<T>(self, ctx: &TemplateContext<'_, T>) -> Result<String, RenderError> {
        let data = ctx.pagination().ok_or(RenderError::MissingPaginationData)?;
        let mut pages = PageList::new(ctx.request(), data.page, data.querystring_key.as_str())
            .with_settings(ctx.settings())
            .with_default_number(data.default_number);
        if let Some(path) = &data.override_path {
            pages = pages.with_override_path(path.as_str());
        }
        Ok(pages.to_html())
    }
}

/// `{% show_pageitems %}`: the item-count summary of the last `paginate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub struct ShowPageItemsNode;

impl ShowPageItemsNode {
    /// Render "Showing X to Y of Z items".
    pub fn render<T>(self, ctx: &TemplateContext<'_, T>) -> Result<String, RenderError> {
        let data = ctx.pagination().ok_or(RenderError::MissingPaginationData)?;
        Ok(ShowItems::new(data.page).to_string())
    }
}

fn lookup<'c, T>(ctx: &'c TemplateContext<'_, T>, name: &str) -> Result<&'c str, RenderError> {
    ctx.var(name).ok_or_else(|| RenderError::MissingVariable {
        name: name.to_string(),
    })
}

fn resolve_number<T, N>(ctx: &TemplateContext<'_, T>, arg: &Arg<N>) -> Result<N, RenderError>
where
    N: FromStr + Copy,
{
    match arg {
        Arg::Literal(value) => Ok(*value),
        Arg::Variable(name) => {
            let value = lookup(ctx, name)?;
            value.trim().parse().map_err(|_| RenderError::InvalidInteger {
                name: name.clone(),
                value: value.to_string(),
            })
        },
    }
}

fn resolve_text<T>(ctx: &TemplateContext<'_, T>, arg: &Arg<String>) -> Result<String, RenderError> {
    match arg {
        Arg::Literal(value) => Ok(value.clone()),
        Arg::Variable(name) => lookup(ctx, name).map(str::to_string),
    }
}
