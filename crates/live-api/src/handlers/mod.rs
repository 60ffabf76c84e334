//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod health;
pub mod livestreams;
pub mod reactions;
pub mod statistics;
pub mod system;
pub mod tags;
