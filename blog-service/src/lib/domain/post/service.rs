use std::sync::Arc;

use async_trait::async_trait;

use crate::account::models::AccountId;
use crate::post::errors::PostError;
use crate::post::models::Post;
use crate::post::models::PostContentCommand;
use crate::post::models::PostId;
use crate::post::ports::PostRepository;
use crate::post::ports::PostServicePort;

/// Domain service implementation for post operations.
///
/// Thin by design: ownership enforcement lives in the repository's
/// conditional statements, so the service only routes calls and fills in
/// the authenticated author.
pub struct PostService<PR>
where
    PR: PostRepository,
{
    repository: Arc<PR>,
}

impl<PR> PostService<PR>
where
    PR: PostRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<PR> PostServicePort for PostService<PR>
where
    PR: PostRepository,
{
    async fn create_post(
        &self,
        command: PostContentCommand,
        author: AccountId,
    ) -> Result<Post, PostError> {
        self.repository
            .create(&command.title, &command.content, author)
            .await
    }

    async fn list_posts(&self) -> Result<Vec<Post>, PostError> {
        self.repository.list_all().await
    }

    async fn get_post(&self, id: PostId) -> Result<Post, PostError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(PostError::NotFound(id.0))
    }

    async fn update_post(
        &self,
        id: PostId,
        author: AccountId,
        command: PostContentCommand,
    ) -> Result<(), PostError> {
        self.repository
            .update(id, author, &command.title, &command.content)
            .await
    }

    async fn delete_post(&self, id: PostId, author: AccountId) -> Result<(), PostError> {
        self.repository.delete(id, author).await
    }
}
