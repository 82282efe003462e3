//! End-to-end integration tests.
//!
//! These tests drive the sync operations and the reconciliation pass
//! against a mocked admin API (wiremock) and a temporary local repo.


mod admin_api;
mod check_clients;
