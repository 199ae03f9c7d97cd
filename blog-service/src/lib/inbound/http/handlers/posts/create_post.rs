use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedAccount;
use crate::inbound::http::router::AppState;
use crate::post::models::PostContentCommand;
use crate::post::ports::PostServicePort;

pub async fn create_post(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedAccount>,
    Json(body): Json<CreatePostRequest>,
) -> Result<ApiSuccess<CreatePostResponseData>, ApiError> {
    let command = PostContentCommand {
        title: body.title,
        content: body.content,
    };

    state
        .post_service
        .create_post(command, identity.account_id)
        .await
        .map_err(ApiError::from)
        .map(|post| ApiSuccess::new(StatusCode::CREATED, CreatePostResponseData { id: post.id.0 }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatePostRequest {
    title: String,
    content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatePostResponseData {
    pub id: i64,
}
