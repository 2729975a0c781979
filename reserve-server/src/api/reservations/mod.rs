//! Reservation API

mod handler;

use axum::{Router, routing::get};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/v1/reservations",
            get(handler::search).post(handler::create),
        )
        .route(
            "/v1/reservations/{reservation_id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::cancel),
        )
        .route(
            "/v1/reservations/{reservation_id}/menus",
            get(handler::list_menus),
        )
}
