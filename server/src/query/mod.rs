//! Query processor for the paginated collections.
//!
//! A request runs through a fixed pipeline over a read-only slice of records:
//!
//! 1. `startDate`/`endDate` range on `lastactivity` (registrants only)
//! 2. Equality clauses, combined with AND, dotted keys resolve nested fields
//! 3. Optional stable sort on `_sort`, reversed by `_order=desc`
//! 4. Page bounds check against `ceil(total / pagesize)`
//! 5. Slice the requested page and wrap it in an [`Envelope`]
//!
//! # Example
//!
//! ```
//! use on24_mock::query::{self, PagingHeaders, QueryParams};
//! use on24_mock::resource::Resource;
//! use serde_json::json;
//!
//! let events = vec![
//!     json!({"id": 1, "status": "live"}),
//!     json!({"id": 2, "status": "archived"}),
//!     json!({"id": 3, "status": "live"}),
//! ];
//! let pairs = vec![
//!     ("status".to_string(), "live".to_string()),
//!     ("pagesize".to_string(), "1".to_string()),
//!     ("_sort".to_string(), "id".to_string()),
//!     ("_order".to_string(), "desc".to_string()),
//! ];
//! let params = QueryParams::parse(Resource::Events, &pairs, &PagingHeaders::default());
//!
//! let page = query::execute(Resource::Events, &events, &params).unwrap();
//! assert_eq!(page.total, 2);
//! assert_eq!(page.page_count, 2);
//! assert_eq!(page.items, vec![&events[2]]);
//! ```

pub mod filter;
pub mod page;
pub mod params;
pub mod path;
pub mod sort;

use serde_json::Value;

use crate::resource::Resource;

pub use filter::{DateRange, EqualityClause, matches_text};
pub use page::{Envelope, QueryError, check_bounds, page_count, slice_page};
pub use params::{PagingHeaders, QueryParams};
pub use path::FieldPath;
pub use sort::{SortOrder, SortSpec};

/// Apply the date range, equality clauses, and sort, without paging.
#[must_use]
pub fn filter_and_sort<'a>(
    records: &'a [Value],
    date_range: Option<&DateRange>,
    clauses: &[EqualityClause],
    sort: Option<&SortSpec>,
) -> Vec<&'a Value> {
    let mut matched: Vec<&Value> = match date_range {
        Some(range) => records.iter().filter(|r| range.contains(r)).collect(),
        None => records.iter().collect(),
    };
    matched = filter::apply_clauses(matched, clauses);
    if let Some(sort) = sort {
        sort.apply(&mut matched);
    }
    matched
}

/// Run the full pipeline for one request.
///
/// # Errors
///
/// Returns `QueryError::PageOutOfRange` when the requested page does not
/// exist for the filtered collection.
pub fn execute<'a>(
    resource: Resource,
    records: &'a [Value],
    params: &QueryParams,
) -> Result<Envelope<'a>, QueryError> {
    let matched = filter_and_sort(
        records,
        params.date_range.as_ref(),
        &params.clauses,
        params.sort.as_ref(),
    );

    let total = matched.len();
    let page_count = page_count(total, params.page_size);
    check_bounds(params.page_number, page_count)?;

    let items = slice_page(&matched, params.page_number, params.page_size).to_vec();
    tracing::debug!(
        "{resource}: {total} of {} records matched, page {} of {page_count}",
        records.len(),
        params.page_number
    );

    Ok(Envelope {
        resource,
        current_page: params.page_number,
        page_count,
        total,
        items,
    })
}
