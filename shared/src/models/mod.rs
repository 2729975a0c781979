//! Data models
//!
//! Request/response DTOs exchanged over the REST API. JSON field names are
//! camelCase; response types double as DB row types behind the `db` feature
//! (`#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`), so column names
//! match the snake_case field names.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod auth;
pub mod menu;
pub mod notification;
pub mod page;
pub mod reservation;
pub mod store;
pub mod user;

// Re-exports
pub use auth::*;
pub use menu::*;
pub use notification::*;
pub use page::*;
pub use reservation::*;
pub use store::*;
pub use user::*;
