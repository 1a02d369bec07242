//! Generic read-only REST routes over every top-level dataset entry.
//!
//! Array entries support the same equality filters and `_sort`/`_order` as
//! the paginated endpoints, plus `_page` (1-based) and `_limit` slicing with
//! the total in `X-Total-Count`. Non-array entries are returned verbatim.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderValue, Uri},
    response::{IntoResponse, Response},
};
use serde_json::Value;

use super::{ApiError, AppState};
use crate::query::{self, EqualityClause, SortSpec, matches_text, params};

const PAGE_KEY: &str = "_page";
const LIMIT_KEY: &str = "_limit";
/// Page size used when only `_page` is given.
const DEFAULT_LIMIT: usize = 10;
const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// GET /db
pub async fn database(State(state): State<AppState>) -> Json<Value> {
    Json(state.store.document().clone())
}

/// GET /{name}
pub async fn list(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let entry = state.store.entry(&name).ok_or(ApiError::NotFound)?;
    let Some(records) = entry.as_array() else {
        return Ok(Json(entry).into_response());
    };

    let first = |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    };
    let clauses: Vec<EqualityClause> = pairs
        .iter()
        .filter(|(key, _)| !is_reserved(key))
        .map(|(key, value)| EqualityClause::new(key, value.as_str()))
        .collect();
    let sort = SortSpec::from_params(first(params::SORT_KEY), first(params::ORDER_KEY));
    let matched = query::filter_and_sort(records, None, &clauses, sort.as_ref());

    let page = first(PAGE_KEY).and_then(params::parse_int_prefix);
    let limit = first(LIMIT_KEY)
        .and_then(params::parse_int_prefix)
        .and_then(|limit| usize::try_from(limit).ok());
    if page.is_none() && limit.is_none() {
        return Ok(Json(matched).into_response());
    }

    let limit = limit.unwrap_or(DEFAULT_LIMIT);
    // `_page` counts from 1; anything lower is the first page.
    let page_index = page.map_or(0, |page| page.max(1) - 1);
    let total = matched.len();
    let items = query::slice_page(&matched, page_index, limit);

    let mut response = Json(items).into_response();
    response
        .headers_mut()
        .insert(TOTAL_COUNT_HEADER, HeaderValue::from(total));
    Ok(response)
}

/// GET /{name}/{id}
pub async fn item(
    State(state): State<AppState>,
    Path((name, id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let records = state.store.collection(&name).ok_or(ApiError::NotFound)?;
    records
        .iter()
        .find(|record| record.get("id").is_some_and(|value| matches_text(value, &id)))
        .map(|record| Json(record.clone()))
        .ok_or(ApiError::NotFound)
}

/// Anything the router does not know.
pub async fn not_found(uri: Uri) -> ApiError {
    tracing::debug!("no route for {uri}");
    ApiError::NotFound
}

fn is_reserved(key: &str) -> bool {
    matches!(
        key,
        params::SORT_KEY | params::ORDER_KEY | PAGE_KEY | LIMIT_KEY
    )
}
