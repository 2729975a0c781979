//! Shared types for the reservation service
//!
//! Wire types used by the server and by anything that talks to it:
//! error codes and the error body, plus request/response DTOs for every
//! resource.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorBody, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
