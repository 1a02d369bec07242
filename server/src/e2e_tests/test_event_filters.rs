//! Test equality filters on the events endpoint.

use serde_json::json;

use crate::e2e_tests::helpers::*;

#[test]
fn test_single_field_filter() {
    let app = TestApp::new();

    let resp = app.get("/events?status=live");

    assert_eq!(resp.status, 200);
    assert_eq!(resp.body["totalevents"], 3);
    assert_eq!(resp.ids("events"), vec![json!(1), json!(3), json!(5)]);
}

#[test]
fn test_filters_are_conjunctive() {
    let app = TestApp::new();

    let resp = app.get("/events?status=live&analytics.region=emea");

    assert_eq!(resp.ids("events"), vec![json!(1), json!(5)]);
    assert_eq!(resp.body["totalevents"], 2);
}

#[test]
fn test_dotted_path_compares_numbers_numerically() {
    let app = TestApp::new();

    let exact = app.get("/events?analytics.views=45");
    let decimal = app.get("/events?analytics.views=45.0");

    assert_eq!(exact.ids("events"), vec![json!(2), json!(5)]);
    assert_eq!(decimal.ids("events"), exact.ids("events"));
}

#[test]
fn test_records_missing_the_path_are_excluded() {
    let app = TestApp::new();

    // Event 6 has no analytics object at all.
    let resp = app.get("/events?analytics.region=amer&pagesize=10");

    assert_eq!(resp.ids("events"), vec![json!(2), json!(3)]);
}

#[test]
fn test_numeric_id_filter() {
    let app = TestApp::new();

    let resp = app.get("/events?id=4");

    assert_eq!(resp.ids("events"), vec![json!(4)]);
}

#[test]
fn test_url_encoded_values() {
    let app = TestApp::new();

    let resp = app.get("/events?title=Deep%20Dive");

    assert_eq!(resp.ids("events"), vec![json!(3)]);
}

#[test]
fn test_filter_without_matches_has_no_valid_page() {
    let app = TestApp::new();

    let resp = app.get("/events?status=cancelled");

    assert_eq!(resp.status, 400);
    assert_eq!(
        resp.message(),
        "Invalid pageOffset, range must be between 0 and -1."
    );
}

#[test]
fn test_repeated_key_requires_every_value() {
    let app = TestApp::new();

    let resp = app.get("/events?status=live&status=archived");

    assert_eq!(resp.status, 400);
}

#[test]
fn test_dotted_path_indexes_arrays() {
    let app = TestApp::with_document(json!({
        "events": [
            {"id": 1, "tags": ["webinar", "q1"]},
            {"id": 2, "tags": ["summit"]},
            {"id": 3, "speakers": [{"name": "Grace"}, {"name": "Ada"}]}
        ]
    }));

    let by_tag = app.get("/events?tags.0=webinar");
    let by_speaker = app.get("/events?speakers.1.name=Ada");
    let past_the_end = app.get("/events?tags.1=summit");

    assert_eq!(by_tag.status, 200);
    assert_eq!(by_tag.ids("events"), vec![json!(1)]);
    assert_eq!(by_speaker.ids("events"), vec![json!(3)]);
    assert_eq!(past_the_end.status, 400);
}
