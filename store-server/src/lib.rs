//! Storefront server
//!
//! # Module structure
//!
//! ```text
//! store-server/src/
//! ├── core/          # Config, state, HTTP server
//! ├── auth/          # JWT service, bearer extraction
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # Embedded SurrealDB models and repositories
//! ├── services/      # Email rendering, media storage
//! └── utils/         # Errors, validation, logging
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export the types main and tests reach for
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

pub use utils::logger::{init_logger, init_logger_with_file};
