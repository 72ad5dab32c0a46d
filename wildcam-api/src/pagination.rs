//! Pagination utilities for image listings
//!
//! Pages are 1-indexed and offset based. The requested page is never clamped:
//! a page past the end simply yields no images while the metadata still
//! reports the real total.

use serde::Serialize;

/// Page used when the request omits or garbles `page`
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the request omits or garbles `limit`
pub const DEFAULT_LIMIT: i64 = 20;

/// Pagination metadata returned alongside a page of results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Requested page number (1-indexed)
    pub page: i64,
    /// Requested page size
    pub limit: i64,
    /// Number of rows in the capture-time window
    pub total: i64,
    /// `ceil(total / limit)`, 0 when there are no rows
    pub total_pages: i64,
}

/// Build pagination metadata from the windowed total
///
/// # Examples
/// ```
/// use wildcam_api::pagination::calculate_pagination;
///
/// // 45 rows at 20 per page = 3 pages (20 + 20 + 5)
/// let p = calculate_pagination(2, 20, 45);
/// assert_eq!(p.total_pages, 3);
///
/// // Out-of-range pages are reported as requested
/// let p = calculate_pagination(9, 20, 45);
/// assert_eq!(p.page, 9);
/// ```
pub fn calculate_pagination(page: i64, limit: i64, total: i64) -> Pagination {
    let total_pages = if total <= 0 || limit <= 0 {
        0
    } else {
        total / limit + i64::from(total % limit != 0)
    };

    Pagination {
        page,
        limit,
        total,
        total_pages,
    }
}

/// Row offset of the first item on `page`
pub fn page_offset(page: i64, limit: i64) -> i64 {
    page.saturating_sub(1).max(0).saturating_mul(limit)
}

/// Parse the `page` query parameter, defaulting on absent or bad input
pub fn parse_page(raw: Option<&str>) -> i64 {
    parse_positive(raw).unwrap_or(DEFAULT_PAGE)
}

/// Parse the `limit` query parameter, defaulting on absent or bad input
pub fn parse_limit(raw: Option<&str>) -> i64 {
    parse_positive(raw).unwrap_or(DEFAULT_LIMIT)
}

fn parse_positive(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|value| *value > 0)
}
