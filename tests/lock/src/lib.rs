//! Shared helpers for the lock tests and the `search_fixture` binary.
//!
//! Everything here builds on the harness's public API only, so the tests
//! exercise the same surface the CLI uses.

pub mod bfs_baseline;
