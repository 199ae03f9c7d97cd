use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedAccount;
use crate::inbound::http::router::AppState;
use crate::post::models::PostContentCommand;
use crate::post::models::PostId;
use crate::post::ports::PostServicePort;

/// Updates only where id and authenticated author both match; a miss on
/// either yields 404, indistinguishable from a missing post.
pub async fn update_post(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedAccount>,
    Path(id): Path<i64>,
    Json(body): Json<UpdatePostRequest>,
) -> Result<ApiSuccess<()>, ApiError> {
    let command = PostContentCommand {
        title: body.title,
        content: body.content,
    };

    state
        .post_service
        .update_post(PostId(id), identity.account_id, command)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, ()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdatePostRequest {
    title: String,
    content: String,
}
