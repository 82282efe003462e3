//! Integration test member crate. All tests live under `tests/`.
