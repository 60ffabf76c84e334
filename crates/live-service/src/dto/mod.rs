//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{PostLiveCommentRequest, PostReactionRequest};

pub use responses::{
    HealthChecks, HealthResponse, InitializeResponse, LiveCommentResponse, LivestreamResponse,
    LivestreamStatisticsResponse, ReactionResponse, ReadinessResponse, ReportResponse,
    TagResponse, TagsResponse, UserResponse, UserStatisticsResponse, ViewerHistoryResponse,
};
