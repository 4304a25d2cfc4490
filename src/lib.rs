//! Layered REST backend for user records: handlers -> service -> repository -> PostgreSQL.

pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod repository;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{AppConfig, DbConfig};
pub use error::{AppError, ConfigError};
pub use middleware::recovery_layer;
pub use repository::{PgUserRepository, UserRepository};
pub use routes::{app_router, common_routes, common_routes_with_ready, not_found, user_routes};
pub use service::{UserService, UserServiceImpl};
pub use state::AppState;
pub use store::{connect_pool, ensure_database_exists, ensure_schema};
