//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Manual mocks keep the port traits free of mocking attributes and let tests
//! seed and inspect the in-memory store directly.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
