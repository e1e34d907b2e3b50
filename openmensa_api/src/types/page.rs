//! One page of a paginated listing and the metadata the server sends in headers.

use reqwest::header::HeaderMap;

pub const HEADER_CURRENT_PAGE: &str = "x-current-page";
pub const HEADER_TOTAL_PAGES: &str = "x-total-pages";
pub const HEADER_TOTAL_COUNT: &str = "x-total-count";
pub const HEADER_PER_PAGE: &str = "x-per-page";

/// Pagination metadata taken from the `X-*` response headers.
///
/// `total_pages` is always at least 1 and `current_page` always lies in
/// `1..=total_pages`, whatever the server sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageInfo {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_count: u64,
    pub per_page: Option<u32>,
}

impl PageInfo {
    /// Builds metadata from already-parsed header values, clamping out-of-range numbers.
    pub fn new(current_page: i64, total_pages: i64, total_count: i64, per_page: Option<i64>) -> Self {
        let total_pages = clamp_u32(total_pages).max(1);
        Self {
            current_page: clamp_u32(current_page).clamp(1, total_pages),
            total_pages,
            total_count: total_count.max(0) as u64,
            per_page: per_page.map(clamp_u32).filter(|n| *n > 0),
        }
    }

    /// Extracts metadata from response headers.
    ///
    /// Returns `None` when `X-Total-Pages` is missing or not a number; callers
    /// treat that as a single-page listing.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let total_pages = header_i64(headers, HEADER_TOTAL_PAGES)?;
        Some(Self::new(
            header_i64(headers, HEADER_CURRENT_PAGE).unwrap_or(1),
            total_pages,
            header_i64(headers, HEADER_TOTAL_COUNT).unwrap_or(0),
            header_i64(headers, HEADER_PER_PAGE),
        ))
    }
}

fn header_i64(headers: &HeaderMap, name: &str) -> Option<i64> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}

fn clamp_u32(value: i64) -> u32 {
    value.clamp(0, u32::MAX as i64) as u32
}

/// One response unit of a paginated listing.
///
/// `body` is `None` when the server answered without a payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub body: Option<Vec<T>>,
    pub info: Option<PageInfo>,
}

impl<T> Page<T> {
    pub fn new(body: Option<Vec<T>>, info: Option<PageInfo>) -> Self {
        Self { body, info }
    }

    /// Total number of pages in the listing. Absent metadata means one page.
    pub fn total_pages(&self) -> u32 {
        self.info.map_or(1, |info| info.total_pages.max(1))
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.body.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consumes the page, yielding its items. A missing body yields an empty vec.
    pub fn into_items(self) -> Vec<T> {
        self.body.unwrap_or_default()
    }
}
