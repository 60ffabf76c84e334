//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions turning database rows into domain objects.
//! Inserts bind entity fields directly, so there are no insert structs.

mod livecomment;
mod livestream;
mod reaction;
mod tag;
mod user;
