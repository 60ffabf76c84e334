//! Database models - SQLx-compatible structs for PostgreSQL tables

mod livecomment;
mod livestream;
mod reaction;
mod report;
mod tag;
mod user;
mod viewer;

pub use livecomment::LiveCommentModel;
pub use livestream::LivestreamModel;
pub use reaction::ReactionModel;
pub use report::ReportModel;
pub use tag::{LivestreamTagModel, TagModel};
pub use user::UserModel;
pub use viewer::ViewerHistoryModel;
