//! Pagination settings.
//!
//! Defaults live in [`crate::constants`]; each can be overridden through an
//! environment variable or set explicitly with the builder methods.
//!
//! # Usage
//!
//! ```
//! use simple_pagination::Settings;
//!
//! // Mock environment for demonstration
//! let env_vars = vec![
//!     ("SIMPLE_PAGINATION_PER_PAGE".to_string(), "25".to_string()),
//!     ("SIMPLE_PAGINATION_PAGE_LABEL".to_string(), "p".to_string()),
//! ];
//!
//! let settings = Settings::from_env_vars(&env_vars);
//! assert_eq!(settings.per_page, 25);
//! assert_eq!(settings.page_label, "p");
//!
//! let settings = Settings::default().with_per_page(5).with_next_label("Next");
//! assert_eq!(settings.per_page, 5);
//! assert_eq!(settings.next_label, "Next");
//! ```
//!
//! # Process-wide settings
//!
//! [`settings()`] reads the real environment once and caches the result for
//! the lifetime of the process, so environment changes after first access
//! have no effect.

use crate::constants::{
    DEFAULT_FIRST_LABEL, DEFAULT_LAST_LABEL, DEFAULT_NEXT_LABEL, DEFAULT_PAGE_LABEL,
    DEFAULT_PER_PAGE, DEFAULT_PREVIOUS_LABEL, ENV_FIRST_LABEL, ENV_LAST_LABEL, ENV_NEXT_LABEL,
    ENV_PAGE_LABEL, ENV_PER_PAGE, ENV_PREVIOUS_LABEL,
};
use crate::window::{PageListFn, page_numbers};
use std::sync::OnceLock;

/// Configurable pagination defaults.
///
/// Labels are trusted markup and are rendered unescaped.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Settings {
    /// Items per page when the tag does not say.
    pub per_page: usize,
    /// Query parameter carrying the page number when the tag does not say.
    pub page_label: String,
    /// Label of the "next page" link.
    pub next_label: String,
    /// Label of the "previous page" link.
    pub previous_label: String,
    /// Label of the "last page" arrow.
    pub last_label: String,
    /// Label of the "first page" arrow.
    pub first_label: String,
    /// Page-list callable; `None` means [`page_numbers`].
    pub page_list: Option<PageListFn>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            page_label: DEFAULT_PAGE_LABEL.to_string(),
            next_label: DEFAULT_NEXT_LABEL.to_string(),
            previous_label: DEFAULT_PREVIOUS_LABEL.to_string(),
            last_label: DEFAULT_LAST_LABEL.to_string(),
            first_label: DEFAULT_FIRST_LABEL.to_string(),
            page_list: None,
        }
    }
}

impl Settings {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        let vars: Vec<(String, String)> = std::env::vars().collect();
        Self::from_env_vars(&vars)
    }

    /// Defaults overridden by the given environment pairs.
    ///
    /// A per-page value that is not a positive integer is ignored with a
    /// warning.
    pub fn from_env_vars(env: &[(String, String)]) -> Self {
        let get = |name: &str| env.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str());
        let mut settings = Self::default();

        if let Some(raw) = get(ENV_PER_PAGE) {
            match raw.trim().parse::<usize>() {
                Ok(per_page) if per_page > 0 => settings.per_page = per_page,
                _ => tracing::warn!(
                    var = ENV_PER_PAGE,
                    value = raw,
                    default = DEFAULT_PER_PAGE,
                    "invalid per-page setting, using default"
                ),
            }
        }

        let labels = [
            (ENV_PAGE_LABEL, &mut settings.page_label),
            (ENV_NEXT_LABEL, &mut settings.next_label),
            (ENV_PREVIOUS_LABEL, &mut settings.previous_label),
            (ENV_LAST_LABEL, &mut settings.last_label),
            (ENV_FIRST_LABEL, &mut settings.first_label),
        ];
        for (name, slot) in labels {
            if let Some(value) = get(name) {
                *slot = value.to_string();
            }
        }

        settings
    }

    /// Set the default page size.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page;
        self
    }

    /// Set the default querystring key.
    pub fn with_page_label(mut self, label: impl Into<String>) -> Self {
        self.page_label = label.into();
        self
    }

    /// Set the "next page" label.
    pub fn with_next_label(mut self, label: impl Into<String>) -> Self {
        self.next_label = label.into();
        self
    }

    /// Set the "previous page" label.
    pub fn with_previous_label(mut self, label: impl Into<String>) -> Self {
        self.previous_label = label.into();
        self
    }

    /// Set the "last page" arrow label.
    pub fn with_last_label(mut self, label: impl Into<String>) -> Self {
        self.last_label = label.into();
        self
    }

    /// Set the "first page" arrow label.
    pub fn with_first_label(mut self, label: impl Into<String>) -> Self {
        self.first_label = label.into();
        self
    }

    /// Replace the Digg-style window with a custom page-list callable.
    pub fn with_page_list(mut self, page_list: PageListFn) -> Self {
        self.page_list = Some(page_list);
        self
    }

    /// The page-list callable in effect.
    pub fn page_list_fn(&self) -> PageListFn {
        self.page_list.unwrap_or(page_numbers)
    }
}

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Process-wide settings, read from the environment on first call.
pub fn settings() -> &'static Settings {
    SETTINGS.get_or_init(Settings::from_env)
}
