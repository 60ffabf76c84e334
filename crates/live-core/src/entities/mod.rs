//! Domain entities - rows of the primary store

mod livecomment;
mod livestream;
mod reaction;
mod report;
mod tag;
mod user;
mod viewer;

pub use livecomment::{LiveComment, NewLiveComment};
pub use livestream::Livestream;
pub use reaction::{NewReaction, Reaction};
pub use report::{NewReport, Report};
pub use tag::{LivestreamTag, Tag};
pub use user::User;
pub use viewer::ViewerHistoryEntry;

/// Current unix time in seconds, the timestamp unit used by every row.
pub(crate) fn unix_now() -> i64 {
    chrono::Utc::now().timestamp()
}
