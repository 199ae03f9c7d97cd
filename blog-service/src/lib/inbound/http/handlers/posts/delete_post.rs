use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedAccount;
use crate::inbound::http::router::AppState;
use crate::post::models::PostId;
use crate::post::ports::PostServicePort;

pub async fn delete_post(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedAccount>,
    Path(id): Path<i64>,
) -> Result<ApiSuccess<()>, ApiError> {
    state
        .post_service
        .delete_post(PostId(id), identity.account_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, ()))
}
