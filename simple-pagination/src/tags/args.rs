//! Argument grammar of the `paginate` tag.
//!
//! ```text
//! paginate [[FIRST_PAGE,]PER_PAGE] OBJECTS
//!          [starting from page NUMBER]
//!          [using KEY]
//!          [with OVERRIDE_PATH]
//!          [as VAR_NAME]
//! ```
//!
//! The order of the clauses is fixed. Numbers written as ASCII digits are
//! literals, anything else (other scripts' digits included) names a context
//! variable. `KEY` and `OVERRIDE_PATH` are
//! literals when quoted, context variables otherwise.

use super::error::TagSyntaxError;
use std::sync::LazyLock;

// Hardcoded pattern; every parse test compiles it.
#[expect(clippy::expect_used)]
static PAGINATE_EXPRESSION: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r#"(?x)
        ^
        (?:(?:(?P<first_page>\w+),)?(?P<per_page>\w+)\s+)?     # first page, per page
        (?P<objects>[.\w]+)                                    # collection
        (?:\s+starting\s+from\s+page\s+(?P<number>-?[0-9]+|\w+))? # default page
        (?:\s+using\s+(?P<key>["'\-\w]+))?                     # querystring key
        (?:\s+with\s+(?P<override_path>["'/\w]+))?             # override path
        (?:\s+as\s+(?P<var_name>\w+))?                         # context variable name
        $
        "#,
    )
    .expect("hardcoded regex pattern is valid")
});

/// A tag argument: written out in the template, or looked up in the context.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Arg<T> {
    /// Value written in the tag.
    Literal(T),
    /// Name of a context variable holding the value.
    Variable(String),
}

/// Parsed arguments of a `paginate` tag.
///
/// ```
/// use simple_pagination::{Arg, PaginateArgs};
///
/// let args = PaginateArgs::parse(
///     "paginate",
///     "20 entries starting from page 3 using 'p' as page_entries",
/// )
/// .unwrap();
/// assert_eq!(args.per_page, Some(Arg::Literal(20)));
/// assert_eq!(args.objects, "entries");
/// assert_eq!(args.number, Arg::Literal(3));
/// assert_eq!(args.querystring_key, Some(Arg::Literal("p".to_string())));
/// assert_eq!(args.var_name, "page_entries");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct PaginateArgs {
    /// Size of the first page, if different from the others.
    pub first_page: Option<Arg<usize>>,
    /// Page size; `None` uses the configured default.
    pub per_page: Option<Arg<usize>>,
    /// Context name of the collection to paginate.
    pub objects: String,
    /// Page shown when the request names none; negative counts from the end.
    pub number: Arg<i64>,
    /// Query parameter carrying the page; `None` uses the configured default.
    pub querystring_key: Option<Arg<String>>,
    /// Path used in links instead of the request path.
    pub override_path: Option<Arg<String>>,
    /// Context name the current page's items are stored under.
    pub var_name: String,
}

impl PaginateArgs {
    /// Parse the arguments of tag `tag` (everything after the tag name).
    pub fn parse(tag: &str, args: &str) -> Result<Self, TagSyntaxError> {
        let args = args.trim();
        if args.is_empty() {
            return Err(TagSyntaxError::MissingArguments {
                tag: tag.to_string(),
            });
        }
        let caps = PAGINATE_EXPRESSION
            .captures(args)
            .ok_or_else(|| TagSyntaxError::InvalidArguments {
                tag: tag.to_string(),
            })?;
        let group = |name: &str| caps.name(name).map(|m| m.as_str());

        let objects = group("objects").unwrap_or_default().to_string();
        let var_name = match group("var_name") {
            Some(name) => name.to_string(),
            None if objects.contains('.') => {
                return Err(TagSyntaxError::NestedObjectsRequireName {
                    tag: tag.to_string(),
                    objects,
                });
            },
            None => objects.clone(),
        };

        let number = match group("number") {
            None => Arg::Literal(crate::constants::DEFAULT_PAGE_NUMBER),
            Some(raw) => raw
                .parse()
                .map_or_else(|_| Arg::Variable(raw.to_string()), Arg::Literal),
        };

        Ok(Self {
            first_page: group("first_page").map(|raw| size_arg(tag, raw)).transpose()?,
            per_page: group("per_page").map(|raw| size_arg(tag, raw)).transpose()?,
            objects,
            number,
            querystring_key: group("key").map(string_arg),
            override_path: group("override_path").map(string_arg),
            var_name,
        })
    }
}

/// Digits are a literal size, anything else a variable name.
fn size_arg(tag: &str, raw: &str) -> Result<Arg<usize>, TagSyntaxError> {
    if raw.bytes().all(|b| b.is_ascii_digit()) {
        raw.parse()
            .map(Arg::Literal)
            .map_err(|_| TagSyntaxError::InvalidNumber {
                tag: tag.to_string(),
                value: raw.to_string(),
            })
    } else {
        Ok(Arg::Variable(raw.to_string()))
    }
}

/// Quoted text is a literal, anything else a variable name.
fn string_arg(raw: &str) -> Arg<String> {
    match unquote(raw) {
        Some(literal) => Arg::Literal(literal.to_string()),
        None => Arg::Variable(raw.to_string()),
    }
}

fn unquote(raw: &str) -> Option<&str> {
    let quote = raw.chars().next().filter(|c| matches!(c, '"' | '\''))?;
    if !raw.ends_with(quote) {
        return None;
    }
    Some(raw.get(1..raw.len() - 1).unwrap_or_default())
}
