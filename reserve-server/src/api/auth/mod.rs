//! Sign-in API

mod handler;

use axum::{Router, routing::post};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/signin", post(handler::sign_in))
        .route("/v1/signin/refresh", post(handler::refresh))
        .route("/v1/signout", post(handler::sign_out))
}
