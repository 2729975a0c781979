//! HTTP API
//!
//! One module per resource, each exposing `router()`. Handlers extract
//! [`CurrentUser`](crate::auth::CurrentUser) where authentication is needed
//! and return `AppResult`. Bodies, query strings and path parameters go
//! through [`extract`] so malformed input is reported as an `AppError`.

pub mod access;
pub mod auth;
pub mod extract;
pub mod health;
pub mod menus;
pub mod notifications;
pub mod reservations;
pub mod stores;
pub mod users;

use axum::Router;
use axum::http::{HeaderName, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(auth::router())
        .merge(users::router())
        .merge(stores::router())
        .merge(menus::router())
        .merge(reservations::router())
        .merge(notifications::router())
}

/// Build the application: routes, middleware and state
pub fn create_router(state: AppState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    build_router()
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), XRequestId))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(request_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// `201 Created` with a `Location` header and no body
pub fn created(location: String) -> Response {
    (StatusCode::CREATED, [(header::LOCATION, location)]).into_response()
}
