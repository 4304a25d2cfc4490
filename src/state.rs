//! Shared application state assembled once at startup.

use std::sync::Arc;

use sqlx::PgPool;

use crate::service::UserService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn UserService>,
    /// Held for the readiness probe only; request handling reaches the store
    /// through the service.
    pub pool: PgPool,
}
