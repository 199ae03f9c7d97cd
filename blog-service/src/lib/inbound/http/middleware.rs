use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::account::models::AccountId;
use crate::inbound::http::router::AppState;

/// Extension type carrying the verified identity for exactly one request.
///
/// Inserted by the middleware on success, read by protected handlers;
/// never cached or shared across requests.
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount {
    pub account_id: AccountId,
    pub email: String,
}

/// Request authenticator: extracts the bearer token, verifies it, and
/// attaches the decoded identity to the request.
///
/// A pure gate — it never touches storage. Verification sub-reasons
/// (expired, tampered, malformed) are logged but collapsed to one
/// external "invalid token" response.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(reason = %e, "Token validation failed");
        unauthorized("Invalid token")
    })?;

    let account_id = claims.account_id().map_err(|e| {
        tracing::warn!(reason = %e, "Token carried a non-numeric subject");
        unauthorized("Invalid token")
    })?;

    req.extensions_mut().insert(AuthenticatedAccount {
        account_id: AccountId(account_id),
        email: claims.email,
    });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| unauthorized("No token provided"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| unauthorized("No token provided"))?;

    // Two-token "scheme credential" shape, bearer scheme only
    match auth_str.split_once(' ') {
        Some(("Bearer", token)) if !token.is_empty() => Ok(token),
        _ => Err(unauthorized("No token provided")),
    }
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "status_code": StatusCode::UNAUTHORIZED.as_u16(),
            "data": { "message": message }
        })),
    )
        .into_response()
}
