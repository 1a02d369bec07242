//! End-to-end tests at the HTTP request/response level.
//!
//! Each test file covers a specific scenario, sending requests through the
//! full router against a fixed in-memory dataset.

#![cfg(test)]

mod helpers;

mod test_event_filters;
