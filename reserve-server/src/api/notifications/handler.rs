//! Notification Handlers
//!
//! Callers only ever see their own notifications; someone else's is reported
//! as not found.

use axum::{
    extract::State,
    http::StatusCode,
};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{ListResponse, NotificationListRequest, NotificationResponse};

use crate::api::extract::{Json, Path, Query};
use crate::auth::CurrentUser;
use crate::db::repository::notification;
use crate::state::AppState;

/// GET /v1/notifications - newest first
pub async fn list(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Query(req): Query<NotificationListRequest>,
) -> AppResult<Json<ListResponse<NotificationResponse>>> {
    let notifications =
        notification::find_by_user(&state.pool, current_user.id, req.page()).await?;
    Ok(Json(ListResponse::new(notifications)))
}

/// PUT /v1/notifications/{notification_id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(notification_id): Path<i64>,
) -> AppResult<StatusCode> {
    if !notification::mark_read(&state.pool, current_user.id, notification_id).await? {
        return Err(AppError::new(ErrorCode::NotificationNotFound));
    }
    Ok(StatusCode::OK)
}

/// DELETE /v1/notifications/{notification_id}
pub async fn delete(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(notification_id): Path<i64>,
) -> AppResult<StatusCode> {
    if !notification::soft_delete(&state.pool, current_user.id, notification_id).await? {
        return Err(AppError::new(ErrorCode::NotificationNotFound));
    }
    Ok(StatusCode::OK)
}
