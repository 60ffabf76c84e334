//! Axum extractors for request handling
//!
//! Custom extractors for authentication, path and query parsing, and validation.

mod auth;
mod path;
mod query;
mod validated;

pub use auth::AuthUser;
pub use path::{LivecommentPath, LivestreamPath, UsernamePath};
pub use query::ReactionLimit;
pub use validated::ValidatedJson;
