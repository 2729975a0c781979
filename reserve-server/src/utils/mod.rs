//! Utilities: logging setup, input validation, reservation time checks

pub mod logger;
pub mod time;
pub mod validation;

pub use shared::error::{AppError, AppResult, ErrorCode};
