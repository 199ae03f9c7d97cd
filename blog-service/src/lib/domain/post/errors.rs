use thiserror::Error;

/// Top-level error for all post-related operations
#[derive(Debug, Clone, Error)]
pub enum PostError {
    /// Covers both a genuinely absent post and one owned by someone else.
    /// The two are deliberately indistinguishable to avoid leaking the
    /// existence of other accounts' posts.
    #[error("Post not found: {0}")]
    NotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
