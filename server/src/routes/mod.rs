//! HTTP surface.
//!
//! `GET /events` and `GET /registrants` go through the query processor and
//! answer with the paginated envelope. Every other path is served by the
//! generic read-only REST router in [`rest`].

mod paginated;
mod rest;

use std::sync::Arc;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::query::QueryError;
use crate::store::DataStore;

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Read-only dataset; never written after startup.
    pub store: Arc<DataStore>,
}

/// Build the full application router.
pub fn build_router(store: Arc<DataStore>) -> Router {
    Router::new()
        .route("/events", get(paginated::events))
        .route("/registrants", get(paginated::registrants))
        .route("/db", get(rest::database))
        .route("/{name}", get(rest::list))
        .route("/{name}/{id}", get(rest::item))
        .fallback(rest::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState { store })
}

/// Errors returned to HTTP clients.
#[derive(Debug)]
pub enum ApiError {
    /// Bad query input; answered with 400 and `{message}`.
    Query(QueryError),
    /// Unknown collection or record; answered with 404 and `{}`.
    NotFound,
}

#[derive(Serialize)]
struct MessageBody {
    message: String,
}

#[derive(Serialize)]
struct EmptyBody {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Query(e) => {
                tracing::debug!("rejecting query: {e}");
                (
                    StatusCode::BAD_REQUEST,
                    Json(MessageBody {
                        message: e.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::NotFound => (StatusCode::NOT_FOUND, Json(EmptyBody {})).into_response(),
        }
    }
}

impl From<QueryError> for ApiError {
    fn from(e: QueryError) -> Self {
        Self::Query(e)
    }
}
