//! Reserve Server - restaurant reservation backend
//!
//! Users register stores, publish menus, and book time slots at other
//! users' stores.
//!
//! ```text
//! reserve-server/src/
//! ├── api/       # HTTP routes and handlers
//! ├── auth/      # JWT, request extractor, password hashing
//! ├── db/        # SQLite pool, migrations, repositories
//! ├── utils/     # logging, validation, reservation time checks
//! ├── config.rs  # environment configuration
//! └── state.rs   # shared handler state
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod state;
pub mod utils;

pub use auth::{CurrentUser, JwtService};
pub use config::Config;
pub use state::AppState;
pub use utils::{AppError, AppResult, ErrorCode};
pub use utils::logger::init_logger;

// Security logging macro, structured fields under the `security` target
#[macro_export]
macro_rules! security_log {
    ($event:expr, $($key:ident = $value:expr),*) => {
        tracing::warn!(
            target: "security",
            event = $event,
            $($key = $value),*
        );
    };
}
