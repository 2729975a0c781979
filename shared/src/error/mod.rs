//! Error system for the reservation service
//!
//! - [`ErrorCode`]: numeric error codes shared with clients
//! - [`ErrorCategory`]: classification of errors by domain
//! - [`AppError`]: error type carrying a code and message
//! - [`ErrorBody`]: the `{errorCode, message}` JSON body
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: User errors
//! - 4xxx: Store errors
//! - 5xxx: Menu errors
//! - 6xxx: Reservation errors
//! - 7xxx: Notification errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorBody, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::ReservationNotFound);
//! let body = ErrorBody::from(&err);
//! assert_eq!(body.error_code, 6001);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody};
