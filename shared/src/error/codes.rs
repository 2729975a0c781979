//! Error codes for the reservation service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: User errors
//! - 4xxx: Store errors
//! - 5xxx: Menu errors
//! - 6xxx: Reservation errors
//! - 7xxx: Notification errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code enum
///
/// Serialized as its numeric value so clients can match on `errorCode`
/// without caring about the Rust variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid request
    InvalidRequest = 3,
    /// Resource not found
    NotFound = 4,
    /// Resource already exists
    Conflict = 5,

    // ==================== 1xxx: Auth ====================
    /// Caller is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,

    // ==================== 2xxx: Permission ====================
    /// Caller may not act on this resource
    AccessDenied = 2001,

    // ==================== 3xxx: User ====================
    /// User not found
    UserNotFound = 3001,
    /// Username already taken
    UsernameDuplicate = 3002,

    // ==================== 4xxx: Store ====================
    /// Store not found
    StoreNotFound = 4001,

    // ==================== 5xxx: Menu ====================
    /// Menu not found
    MenuNotFound = 5001,

    // ==================== 6xxx: Reservation ====================
    /// Reservation not found
    ReservationNotFound = 6001,
    /// Reservation date/hour is in the past or out of range
    InvalidReservationTime = 6002,
    /// Referenced menu does not belong to the reserved store
    MenuNotInStore = 6003,

    // ==================== 7xxx: Notification ====================
    /// Notification not found
    NotificationNotFound = 7001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the client-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::Conflict => "Resource already exists",

            // Auth
            ErrorCode::NotAuthenticated => "Authentication required",
            ErrorCode::InvalidCredentials => "Invalid username or password",
            ErrorCode::TokenExpired => "Token has expired",
            ErrorCode::TokenInvalid => "Token is invalid",

            // Permission
            ErrorCode::AccessDenied => "Access denied",

            // User
            ErrorCode::UserNotFound => "User not found",
            ErrorCode::UsernameDuplicate => "Username is already taken",

            // Store
            ErrorCode::StoreNotFound => "Store not found",

            // Menu
            ErrorCode::MenuNotFound => "Menu not found",

            // Reservation
            ErrorCode::ReservationNotFound => "Reservation not found",
            ErrorCode::InvalidReservationTime => "Reservation time is not available",
            ErrorCode::MenuNotInStore => "Menu does not belong to the store",

            // Notification
            ErrorCode::NotificationNotFound => "Notification not found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::InvalidRequest),
            4 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::Conflict),

            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),

            2001 => Ok(ErrorCode::AccessDenied),

            3001 => Ok(ErrorCode::UserNotFound),
            3002 => Ok(ErrorCode::UsernameDuplicate),

            4001 => Ok(ErrorCode::StoreNotFound),

            5001 => Ok(ErrorCode::MenuNotFound),

            6001 => Ok(ErrorCode::ReservationNotFound),
            6002 => Ok(ErrorCode::InvalidReservationTime),
            6003 => Ok(ErrorCode::MenuNotInStore),

            7001 => Ok(ErrorCode::NotificationNotFound),

            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
