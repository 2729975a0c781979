//! Menu API

mod handler;

use axum::{Router, routing::get};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/v1/stores/{store_id}/menus",
            get(handler::list_by_store).post(handler::create),
        )
        .route(
            "/v1/menus/{menu_id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
