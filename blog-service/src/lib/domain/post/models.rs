use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::account::models::AccountId;

/// Post aggregate entity.
///
/// `author` is a relational reference to the owning account; the storage
/// layer cascades deletion when that account is removed. Title and content
/// are unvalidated strings, constrained only by the schema.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: AccountId,
    pub created_at: DateTime<Utc>,
}

/// Post unique identifier type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(pub i64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command carrying the mutable fields of a post.
///
/// Used for both creation and update; the author always comes from the
/// authenticated request context, never the body.
#[derive(Debug, Clone)]
pub struct PostContentCommand {
    pub title: String,
    pub content: String,
}
