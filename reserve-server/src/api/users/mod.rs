//! User API

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/users", post(handler::sign_up))
        .route(
            "/v1/users/me",
            get(handler::me)
                .put(handler::update_me)
                .delete(handler::delete_me),
        )
        .route("/v1/users/me/password", put(handler::change_password))
        .route("/v1/users/{user_id}", get(handler::get_by_id))
}
