//! Page bounds, slicing, and the response envelope.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::resource::Resource;

/// Errors produced by the query processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The requested page number is outside `0..=max_valid_page`.
    ///
    /// `max_valid_page` is -1 when the filtered collection is empty, so
    /// every page number is rejected in that case.
    PageOutOfRange { requested: i64, max_valid_page: i64 },
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PageOutOfRange { max_valid_page, .. } => write!(
                f,
                "Invalid pageOffset, range must be between 0 and {max_valid_page}."
            ),
        }
    }
}

impl std::error::Error for QueryError {}

/// Number of pages needed for `total` records: `ceil(total / page_size)`.
#[must_use]
pub const fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Check `page_number` against the page count.
///
/// # Errors
///
/// Returns `QueryError::PageOutOfRange` unless `0 <= page_number <= page_count - 1`.
pub fn check_bounds(page_number: i64, page_count: usize) -> Result<(), QueryError> {
    let max_valid_page = i64::try_from(page_count).unwrap_or(i64::MAX) - 1;
    if page_number < 0 || page_number > max_valid_page {
        return Err(QueryError::PageOutOfRange {
            requested: page_number,
            max_valid_page,
        });
    }
    Ok(())
}

/// The `[page_number * page_size, +page_size)` window, clipped to `records`.
///
/// Negative or far out of range page numbers yield an empty slice.
#[must_use]
pub fn slice_page<'r, T>(records: &'r [T], page_number: i64, page_size: usize) -> &'r [T] {
    let Ok(page_number) = usize::try_from(page_number) else {
        return &[];
    };
    let start = page_number.saturating_mul(page_size).min(records.len());
    let end = start.saturating_add(page_size).min(records.len());
    &records[start..end]
}

/// One page of a resource, serialized as
/// `{currentpage, pagecount, total<resource>, <resource>}` in that key order.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<'a> {
    pub resource: Resource,
    pub current_page: i64,
    pub page_count: usize,
    pub total: usize,
    pub items: Vec<&'a Value>,
}

impl Serialize for Envelope<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("currentpage", &self.current_page)?;
        map.serialize_entry("pagecount", &self.page_count)?;
        map.serialize_entry(self.resource.total_key(), &self.total)?;
        map.serialize_entry(self.resource.name(), &self.items)?;
        map.end()
    }
}
