//! Paging and sorting descriptors

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::ship::Ship;

/// Sort key for paged ship listings (ascending)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipOrder {
    #[default]
    Id,
    Speed,
    ProdDate,
    Rating,
}

impl ShipOrder {
    /// Compare two ships by this key, falling back to `id` on ties
    pub fn compare(&self, a: &Ship, b: &Ship) -> Ordering {
        let primary = match self {
            ShipOrder::Id => Ordering::Equal,
            ShipOrder::Speed => a.speed.total_cmp(&b.speed),
            ShipOrder::ProdDate => a.prod_date.cmp(&b.prod_date),
            ShipOrder::Rating => a.rating.total_cmp(&b.rating),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

/// One page of a listing: zero-based page number, page size and sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: usize,
    pub page_size: usize,
    pub order: ShipOrder,
}

impl PageRequest {
    /// Create a page request; the page size is at least 1
    pub fn new(page_number: usize, page_size: usize, order: ShipOrder) -> Self {
        Self {
            page_number,
            page_size: page_size.max(1),
            order,
        }
    }

    /// Index of the first record on this page
    pub fn offset(&self) -> usize {
        self.page_number.saturating_mul(self.page_size)
    }
}

/// Paging parameters as they arrive in a query string
///
/// # Example
/// ```text
/// GET /rest/ships?pageNumber=2&pageSize=10&order=RATING
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageParams {
    /// Zero-based page number (defaults to 0)
    pub page_number: Option<usize>,

    /// Number of ships per page (defaults to the configured page size)
    pub page_size: Option<usize>,

    /// Sort key (defaults to `ID`)
    pub order: Option<ShipOrder>,
}

impl PageParams {
    /// Resolve defaults and clamp the page size to `[1, max_page_size]`
    pub fn to_page_request(&self, default_page_size: usize, max_page_size: usize) -> PageRequest {
        let page_size = self
            .page_size
            .unwrap_or(default_page_size)
            .clamp(1, max_page_size.max(1));

        PageRequest::new(
            self.page_number.unwrap_or(0),
            page_size,
            self.order.unwrap_or_default(),
        )
    }
}

/// Paginated result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    /// The records on this page
    pub data: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, request: &PageRequest, total: usize) -> Self {
        Self {
            data,
            pagination: PaginationMeta::new(request.page_number, request.page_size, total),
        }
    }
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Zero-based page number
    pub page_number: usize,

    pub page_size: usize,

    /// Total number of matching records (across all pages)
    pub total: usize,

    pub total_pages: usize,

    pub has_next: bool,

    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(page_number: usize, page_size: usize, total: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total.div_ceil(page_size);
        let start = page_number.saturating_mul(page_size);

        Self {
            page_number,
            page_size,
            total,
            total_pages,
            has_next: start.saturating_add(page_size) < total,
            has_prev: page_number > 0,
        }
    }
}
