//! Paginated list responses and their query options.

use serde::{Deserialize, Serialize};

/// Default page size used by list endpoints.
pub const DEFAULT_LIMIT: u32 = 20;

/// Lightweight reference to another resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    /// Resource name.
    pub name: String,
    /// Absolute URL of the full resource.
    pub url: String,
}

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T = NamedResource> {
    /// Total number of entries across all pages.
    pub count: u32,
    /// URL of the next page, if any.
    pub next: Option<String>,
    /// URL of the previous page, if any.
    pub previous: Option<String>,
    /// Entries on this page.
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// First entry on this page.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.results.first()
    }

    /// Returns true if there is a following page.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Returns true if this page has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl Page<NamedResource> {
    /// Name of the first entry, if any.
    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.first().map(|r| r.name.as_str())
    }
}

/// Offset/limit window for list endpoints.
///
/// Field order matters: it is the order of the query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageOptions {
    /// Number of entries to skip.
    pub offset: u32,
    /// Maximum number of entries to return.
    pub limit: u32,
}

impl PageOptions {
    /// Creates options for the given window.
    #[must_use]
    pub const fn new(offset: u32, limit: u32) -> Self {
        Self { offset, limit }
    }

    /// Sets the offset (builder pattern).
    #[must_use]
    pub const fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the limit (builder pattern).
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

impl Default for PageOptions {
    fn default() -> Self {
        Self::new(0, DEFAULT_LIMIT)
    }
}
