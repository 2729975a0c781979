//! Ownership checks shared by handlers
//!
//! Stores and menus are public to read but only their registrant may write.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{MenuInfoResponse, StoreInfoResponse};
use sqlx::SqlitePool;

use crate::auth::CurrentUser;
use crate::db::repository::{menu, store};
use crate::security_log;

pub async fn find_store(pool: &SqlitePool, store_id: i64) -> AppResult<StoreInfoResponse> {
    store::find_by_id(pool, store_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::StoreNotFound))
}

pub async fn find_menu(pool: &SqlitePool, menu_id: i64) -> AppResult<MenuInfoResponse> {
    menu::find_by_id(pool, menu_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::MenuNotFound))
}

/// Load a store the caller registered; 404 if absent, 403 if someone else's
pub async fn owned_store(
    pool: &SqlitePool,
    store_id: i64,
    user: &CurrentUser,
) -> AppResult<StoreInfoResponse> {
    let store = find_store(pool, store_id).await?;
    if store.registrant_id != user.id {
        security_log!(
            "store_access_denied",
            user_id = user.id,
            store_id = store_id
        );
        return Err(AppError::access_denied());
    }
    Ok(store)
}

/// Load a menu whose store the caller registered
pub async fn owned_menu(
    pool: &SqlitePool,
    menu_id: i64,
    user: &CurrentUser,
) -> AppResult<MenuInfoResponse> {
    let menu = find_menu(pool, menu_id).await?;
    owned_store(pool, menu.store_id, user).await?;
    Ok(menu)
}
