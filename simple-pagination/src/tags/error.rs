//! Tag parsing and rendering errors.

use crate::paginator::PageError;

/// Error raised while parsing template tags.
///
/// These are template authoring mistakes: they surface when a template is
/// compiled, before any request is rendered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TagSyntaxError {
    /// `{% %}` with nothing inside.
    #[error("empty tag")]
    EmptyTag,

    /// `{%` without a closing `%}`.
    #[error("unterminated tag starting at byte {position}")]
    Unterminated {
        /// Byte offset of the opening `{%`
        position: usize,
    },

    /// A tag this crate does not know.
    #[error("unknown tag `{tag}`")]
    UnknownTag {
        /// Tag name
        tag: String,
    },

    /// A tag that needs arguments got none.
    #[error("`{tag}` tag requires arguments")]
    MissingArguments {
        /// Tag name
        tag: String,
    },

    /// Arguments that do not follow the tag grammar.
    #[error("invalid arguments for `{tag}` tag")]
    InvalidArguments {
        /// Tag name
        tag: String,
    },

    /// A nested collection name (`entries.all`) without `as NAME`.
    #[error(
        "`{tag}` tag requires a variable name `as` argument if the collection is \
         provided as a nested context variable ({objects}); e.g. `{tag} {objects} as objects`"
    )]
    NestedObjectsRequireName {
        /// Tag name
        tag: String,
        /// The nested collection name
        objects: String,
    },

    /// An argument-less tag got arguments.
    #[error("`{tag}` tag takes no arguments")]
    TakesNoArguments {
        /// Tag name
        tag: String,
    },

    /// A numeric literal that does not fit.
    #[error("invalid number `{value}` in `{tag}` tag")]
    InvalidNumber {
        /// Tag name
        tag: String,
        /// The literal as written
        value: String,
    },
}

/// Error raised while rendering a tag against a context.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RenderError {
    /// The template itself is malformed.
    #[error(transparent)]
    Syntax(#[from] TagSyntaxError),

    /// `show_pages` / `show_pageitems` ran before `paginate`.
    #[error("cannot find pagination data in context; `paginate` must run first")]
    MissingPaginationData,

    /// A context variable named by the tag does not exist.
    #[error("variable `{name}` does not exist in context")]
    MissingVariable {
        /// Variable name
        name: String,
    },

    /// A context variable that must be an integer is not one.
    #[error("variable `{name}` is not an integer: {value:?}")]
    InvalidInteger {
        /// Variable name
        name: String,
        /// The resolved value
        value: String,
    },

    /// The paginator rejected its parameters.
    #[error(transparent)]
    Page(#[from] PageError),
}
