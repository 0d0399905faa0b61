//! Query parameters and pagination utilities

use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maximum number of rows per page
pub const MAX_PAGE_SIZE: usize = 100;

fn default_page() -> usize {
    1
}

fn default_limit() -> usize {
    20
}

/// Request sent to a record provider
///
/// This is the inbound boundary of a view: `(page, page_size, status)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub page_size: usize,

    /// Optional status filter applied by the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl PageRequest {
    /// Build a request, clamping page to >= 1 and page size to 1..=100
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
            status: None,
        }
    }

    /// Request every record in a single page
    pub fn everything() -> Self {
        Self {
            page: 1,
            page_size: usize::MAX,
            status: None,
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Offset of the first item of this page
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1).saturating_mul(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(default_page(), default_limit())
    }
}

/// One page of records returned by a provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total number of records matching the request, across all pages
    pub total_count: usize,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }
}

/// Query parameters for listing a view over HTTP
///
/// # Example
/// ```text
/// GET /discounts?page=2&limit=10
/// GET /discounts?search=spring&filter={"status":"Active"}&sort=amount:desc
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ListQuery {
    /// Page number (starts at 1)
    #[serde(default = "default_page")]
    pub page: usize,

    /// Number of items per page
    pub limit: Option<usize>,

    /// Free-text search query
    pub search: Option<String>,

    /// Dropdown filters as a flat JSON object, e.g. `{"status": "Active"}`
    pub filter: Option<String>,

    /// Sort field and direction (`field`, `field:asc` or `field:desc`)
    pub sort: Option<String>,
}

impl ListQuery {
    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Parse the filter JSON into field name -> raw value pairs
    pub fn filters(&self) -> Result<BTreeMap<String, String>, ValidationError> {
        let Some(raw) = self.filter.as_deref() else {
            return Ok(BTreeMap::new());
        };

        let value: serde_json::Value = serde_json::from_str(raw)
            .map_err(|e| ValidationError::MalformedFilter(e.to_string()))?;

        let object = value
            .as_object()
            .ok_or_else(|| ValidationError::MalformedFilter("expected a JSON object".into()))?;

        object
            .iter()
            .map(|(field, value)| match value {
                serde_json::Value::String(s) => Ok((field.clone(), s.clone())),
                serde_json::Value::Number(n) => Ok((field.clone(), n.to_string())),
                serde_json::Value::Bool(b) => Ok((field.clone(), b.to_string())),
                _ => Err(ValidationError::MalformedFilter(format!(
                    "value for '{}' must be a scalar",
                    field
                ))),
            })
            .collect()
    }
}

/// Paginated response structure
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    /// The paginated data
    pub data: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        let page = page.max(1);
        let limit = limit.max(1);
        let total_pages = if total == 0 { 0 } else { total.div_ceil(limit) };
        let start = (page - 1).saturating_mul(limit);

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: start.saturating_add(limit) < total,
            has_prev: page > 1,
        }
    }
}

/// Slice one page out of an already filtered and sorted list
pub fn paginate<T>(items: Vec<T>, page: usize, limit: usize) -> PaginatedResponse<T> {
    let pagination = PaginationMeta::new(page, limit, items.len());
    let start = (pagination.page - 1).saturating_mul(pagination.limit);
    let data = items
        .into_iter()
        .skip(start)
        .take(pagination.limit)
        .collect();

    PaginatedResponse { data, pagination }
}
