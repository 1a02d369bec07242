//! Shared fixtures for unit and end-to-end tests.

use serde_json::{Value, json};

use crate::store::DataStore;

/// Six events with mixed statuses and nested analytics.
#[must_use]
pub fn sample_events() -> Vec<Value> {
    vec![
        json!({"id": 1, "title": "Kickoff", "status": "live", "analytics": {"views": 120, "region": "emea"}}),
        json!({"id": 2, "title": "Roadmap", "status": "archived", "analytics": {"views": 45, "region": "amer"}}),
        json!({"id": 3, "title": "Deep Dive", "status": "live", "analytics": {"views": 300, "region": "amer"}}),
        json!({"id": 4, "title": "AMA", "status": "upcoming", "analytics": {"views": 0, "region": "apac"}}),
        json!({"id": 5, "title": "Launch", "status": "live", "analytics": {"views": 45, "region": "emea"}}),
        json!({"id": 6, "title": "Recap", "status": "archived"}),
    ]
}

/// Five registrants; one has no `lastactivity`.
#[must_use]
pub fn sample_registrants() -> Vec<Value> {
    vec![
        json!({"id": "r1", "email": "ana@example.com", "company": "Acme", "lastactivity": "2024-01-05T09:00:00Z"}),
        json!({"id": "r2", "email": "bo@example.com", "company": "Globex", "lastactivity": "2024-02-10T12:30:00Z"}),
        json!({"id": "r3", "email": "cy@example.com", "company": "Acme"}),
        json!({"id": "r4", "email": "di@example.com", "company": "Acme", "lastactivity": "2024-03-15T18:45:00Z"}),
        json!({"id": "r5", "email": "ed@example.com", "company": "Initech", "lastactivity": "2023-12-31T23:59:59Z"}),
    ]
}

/// Both collections plus a singular entry, as a loaded store.
#[must_use]
pub fn sample_store() -> DataStore {
    let document = json!({
        "events": sample_events(),
        "registrants": sample_registrants(),
        "speakers": [
            {"id": 1, "name": "Grace", "eventId": 1},
            {"id": 2, "name": "Alan", "eventId": 3},
            {"id": 3, "name": "Ada", "eventId": 1}
        ],
        "profile": {"name": "ON24 mock"}
    });
    match DataStore::from_value(document) {
        Ok(store) => store,
        Err(e) => panic!("sample dataset is an object: {e}"),
    }
}
