// Life of a request:
// 1. axum routes the request
// 2. GET /events and GET /registrants:
//     - Parse paging, sort, date range, and filter parameters
//     - Filter, sort, and bounds-check against the read-only store
//     - Slice the page and wrap it in the ON24-style envelope
//    Anything else:
//     - Generic read-only REST routes over the same store
//
// System components:
//  - Data store (loaded once, shared read-only)
//  - Query processor
//  - HTTP routes

pub mod config;
pub mod query;
pub mod resource;
pub mod routes;
pub mod store;

#[cfg(test)]
mod e2e_tests;
#[cfg(test)]
mod testing;

pub use config::ServerConfig;
pub use routes::build_router;
pub use store::DataStore;
