use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::PostData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::post::models::PostId;
use crate::post::ports::PostServicePort;

pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ApiSuccess<PostData>, ApiError> {
    state
        .post_service
        .get_post(PostId(id))
        .await
        .map_err(ApiError::from)
        .map(|ref post| ApiSuccess::new(StatusCode::OK, post.into()))
}
