//! Common helpers for end-to-end tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::routes::build_router;
use crate::store::DataStore;
use crate::testing::sample_store;

/// A router over an in-memory dataset, driven without a socket.
pub struct TestApp {
    router: Router,
    runtime: tokio::runtime::Runtime,
}

/// Status, headers, and parsed JSON body of one response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestApp {
    /// App over the shared sample dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(sample_store())
    }

    /// App over an arbitrary dataset document.
    #[must_use]
    pub fn with_document(document: Value) -> Self {
        #[allow(clippy::expect_used)]
        let store = DataStore::from_value(document).expect("test dataset must be an object");
        Self::with_store(store)
    }

    fn with_store(store: DataStore) -> Self {
        #[allow(clippy::expect_used)]
        let runtime = tokio::runtime::Runtime::new().expect("Failed to create runtime");
        Self {
            router: build_router(Arc::new(store)),
            runtime,
        }
    }

    /// Send a GET request.
    pub fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, &[])
    }

    /// Send a GET request with extra request headers.
    pub fn get_with_headers(&self, uri: &str, headers: &[(&str, &str)]) -> TestResponse {
        self.send(Method::GET, uri, headers)
    }

    /// Send a request with any method and an empty body.
    #[allow(clippy::expect_used)]
    pub fn send(&self, method: Method, uri: &str, headers: &[(&str, &str)]) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let request = builder.body(Body::empty()).expect("valid request");

        self.runtime.block_on(async {
            let response = self
                .router
                .clone()
                .oneshot(request)
                .await
                .expect("router is infallible");
            let status = response.status();
            let headers = response.headers().clone();
            let bytes = response
                .into_body()
                .collect()
                .await
                .expect("body is readable")
                .to_bytes();
            let body = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes).expect("body is JSON")
            };
            TestResponse {
                status,
                headers,
                body,
            }
        })
    }
}

impl TestResponse {
    /// The `id` of every item under `key`, in response order.
    #[must_use]
    pub fn ids(&self, key: &str) -> Vec<Value> {
        self.body[key]
            .as_array()
            .map(|items| items.iter().map(|item| item["id"].clone()).collect())
            .unwrap_or_default()
    }

    /// Error message of a 400 response.
    #[must_use]
    pub fn message(&self) -> &str {
        self.body["message"].as_str().unwrap_or_default()
    }
}

/// Body key order of a JSON object, as sent over the wire.
#[must_use]
pub fn keys(value: &Value) -> Vec<&str> {
    value
        .as_object()
        .map(|map| map.keys().map(String::as_str).collect())
        .unwrap_or_default()
}
