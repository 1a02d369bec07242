//! ON24-style paginated list endpoints.

use axum::{
    Json,
    extract::{Query, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
};

use super::{ApiError, AppState};
use crate::query::{self, PagingHeaders, QueryParams, params};
use crate::resource::Resource;

/// GET /events
pub async fn events(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    serve_page(Resource::Events, &state, &headers, &pairs)
}

/// GET /registrants
pub async fn registrants(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    serve_page(Resource::Registrants, &state, &headers, &pairs)
}

fn serve_page(
    resource: Resource,
    state: &AppState,
    headers: &HeaderMap,
    pairs: &[(String, String)],
) -> Result<Response, ApiError> {
    let params = QueryParams::parse(resource, pairs, &paging_headers(headers));
    // A dataset without the collection serves it as empty.
    let records = state.store.collection(resource.name()).unwrap_or_default();
    let envelope = query::execute(resource, records, &params)?;
    Ok(Json(envelope).into_response())
}

fn paging_headers(headers: &HeaderMap) -> PagingHeaders {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    };
    PagingHeaders {
        page_number: header(params::PAGE_NUMBER_KEY),
        page_size: header(params::PAGE_SIZE_KEY),
    }
}
