//! Persisted entities.

use sqlx::FromRow;

/// A user row. `id` is assigned by the store; `username` is unique across the
/// table (enforced by the store constraint, not application logic).
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
}
