use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::accounts::login::login;
use super::handlers::accounts::profile::profile;
use super::handlers::accounts::register::register;
use super::handlers::posts::create_post::create_post;
use super::handlers::posts::delete_post::delete_post;
use super::handlers::posts::get_post::get_post;
use super::handlers::posts::list_posts::list_posts;
use super::handlers::posts::update_post::update_post;
use super::middleware::authenticate as auth_middleware;
use crate::domain::account::service::AccountService;
use crate::domain::post::service::PostService;
use crate::outbound::repositories::PostgresAccountRepository;
use crate::outbound::repositories::PostgresPostRepository;

#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService<PostgresAccountRepository>>,
    pub post_service: Arc<PostService<PostgresPostRepository>>,
    pub authenticator: Arc<Authenticator>,
    pub jwt_expiration_hours: i64,
}

pub fn create_router(
    account_service: Arc<AccountService<PostgresAccountRepository>>,
    post_service: Arc<PostService<PostgresPostRepository>>,
    authenticator: Arc<Authenticator>,
    jwt_expiration_hours: i64,
) -> Router {
    let state = AppState {
        account_service,
        post_service,
        authenticator,
        jwt_expiration_hours,
    };

    let public_routes = Router::new()
        .route("/accounts/register", post(register))
        .route("/accounts/login", post(login))
        .route("/posts", get(list_posts))
        .route("/posts/:id", get(get_post));

    let protected_routes = Router::new()
        .route("/accounts/profile", get(profile))
        .route("/posts", post(create_post))
        .route("/posts/:id", put(update_post))
        .route("/posts/:id", delete(delete_post))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
