use crate::{DataError, DataResult};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Number of records before the first record of `page` (1-based).
/// Page 0 has no offset and is rejected.
pub fn offset_for(page: u32, limit: u32) -> DataResult<u64> {
    page.checked_sub(1)
        .map(|previous| u64::from(previous) * u64::from(limit))
        .ok_or_else(|| {
            DataError::InvalidInput(format!("page must be 1 or greater, got {page}"))
        })
}

/// Page metadata derived from the requested page and the backend's total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub limit: u32,
    pub offset: u64,
    pub total_count: u64,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl Pagination {
    pub fn new(page: u32, limit: u32, total_count: u64) -> DataResult<Self> {
        let offset = offset_for(page, limit)?;
        let total_pages = if limit == 0 {
            0
        } else {
            total_count.div_ceil(u64::from(limit))
        };

        Ok(Self {
            current_page: page,
            limit,
            offset,
            total_count,
            total_pages,
            has_next_page: offset + u64::from(limit) < total_count,
            has_prev_page: page > 1,
        })
    }
}

/// Page request parsed from a listing URL's `page` and `pageSize` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub limit: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageQuery {
    /// Missing, non-numeric and zero values fall back to the defaults.
    #[must_use]
    pub fn parse(page: Option<&str>, page_size: Option<&str>) -> Self {
        Self {
            page: parse_positive(page).unwrap_or(DEFAULT_PAGE),
            limit: parse_positive(page_size).unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

fn parse_positive(value: Option<&str>) -> Option<u32> {
    value
        .and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| *value > 0)
}
