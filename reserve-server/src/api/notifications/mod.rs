//! Notification API

mod handler;

use axum::{
    Router,
    routing::{delete, get, put},
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/notifications", get(handler::list))
        .route("/v1/notifications/{notification_id}", delete(handler::delete))
        .route(
            "/v1/notifications/{notification_id}/read",
            put(handler::mark_read),
        )
}
