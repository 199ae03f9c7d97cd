use async_trait::async_trait;

use crate::account::models::AccountId;
use crate::post::errors::PostError;
use crate::post::models::Post;
use crate::post::models::PostContentCommand;
use crate::post::models::PostId;

/// Port for post domain service operations.
#[async_trait]
pub trait PostServicePort: Send + Sync + 'static {
    /// Create a post owned by the authenticated account.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_post(
        &self,
        command: PostContentCommand,
        author: AccountId,
    ) -> Result<Post, PostError>;

    /// All posts, newest first. No authentication required.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_posts(&self) -> Result<Vec<Post>, PostError>;

    /// A single post by identifier. No authentication required.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_post(&self, id: PostId) -> Result<Post, PostError>;

    /// Update title/content of a post owned by `author`.
    ///
    /// # Errors
    /// * `NotFound` - Post absent or owned by a different account
    /// * `DatabaseError` - Database operation failed
    async fn update_post(
        &self,
        id: PostId,
        author: AccountId,
        command: PostContentCommand,
    ) -> Result<(), PostError>;

    /// Delete a post owned by `author`.
    ///
    /// # Errors
    /// * `NotFound` - Post absent or owned by a different account
    /// * `DatabaseError` - Database operation failed
    async fn delete_post(&self, id: PostId, author: AccountId) -> Result<(), PostError>;
}

/// Persistence operations for the post aggregate.
///
/// Update and delete must compile the ownership check into the mutation
/// statement itself (`WHERE id AND author`): the check is atomic with the
/// write, leaving no read-then-write race window.
#[async_trait]
pub trait PostRepository: Send + Sync + 'static {
    /// Insert a new post and return it with its assigned identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(
        &self,
        title: &str,
        content: &str,
        author: AccountId,
    ) -> Result<Post, PostError>;

    /// All posts ordered by creation time, descending.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Post>, PostError>;

    /// Retrieve a post by identifier (None if not found).
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, PostError>;

    /// Conditionally update where both id and author match.
    ///
    /// # Errors
    /// * `NotFound` - Zero rows affected (absent or not owned)
    /// * `DatabaseError` - Database operation failed
    async fn update(
        &self,
        id: PostId,
        author: AccountId,
        title: &str,
        content: &str,
    ) -> Result<(), PostError>;

    /// Conditionally delete where both id and author match.
    ///
    /// # Errors
    /// * `NotFound` - Zero rows affected (absent or not owned)
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: PostId, author: AccountId) -> Result<(), PostError>;
}
