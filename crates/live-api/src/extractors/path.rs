//! Path parameter extractors
//!
//! Path segments are taken as strings and parsed here so a non-integer id becomes a
//! 400 with the offending parameter named.

use serde::Deserialize;

use crate::response::ApiError;

fn parse_id(name: &str, value: &str) -> Result<i64, ApiError> {
    value
        .parse()
        .map_err(|_| ApiError::invalid_path(format!("{name} must be an integer")))
}

/// Path parameters with livestream_id
#[derive(Debug, Deserialize)]
pub struct LivestreamPath {
    pub livestream_id: String,
}

impl LivestreamPath {
    /// Parse livestream_id as an integer
    pub fn livestream_id(&self) -> Result<i64, ApiError> {
        parse_id("livestream_id", &self.livestream_id)
    }
}

/// Path parameters with livestream_id and livecomment_id
#[derive(Debug, Deserialize)]
pub struct LivecommentPath {
    pub livestream_id: String,
    pub livecomment_id: String,
}

impl LivecommentPath {
    /// Parse livestream_id as an integer
    pub fn livestream_id(&self) -> Result<i64, ApiError> {
        parse_id("livestream_id", &self.livestream_id)
    }

    /// Parse livecomment_id as an integer
    pub fn livecomment_id(&self) -> Result<i64, ApiError> {
        parse_id("livecomment_id", &self.livecomment_id)
    }
}

/// Path parameters with username
#[derive(Debug, Deserialize)]
pub struct UsernamePath {
    pub username: String,
}
