//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The in-memory repositories from `adapters::memory` double as test
//! repositories; this module only adds the pieces the server never needs:
//! a recording event publisher and failing ports for error paths.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
