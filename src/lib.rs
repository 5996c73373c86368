//! Workspace root package. End-to-end tests live in `tests/`.
