//! Integration test utilities for the livestream API
//!
//! Drives the full router in-process over the in-memory primary and cache stores.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
