//! User persistence: the only component that issues store queries.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::model::User;
use crate::error::AppError;

/// Persistence port for user rows. Object-safe so the service can hold a test
/// double behind `Arc<dyn UserRepository>`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new row and return the store-assigned entity. The store rejects
    /// duplicate usernames via the unique constraint.
    async fn create_user(&self, username: &str) -> Result<User, AppError>;
    /// Load one row by id. Zero matching rows is `AppError::NotFound`.
    async fn find_user_by_id(&self, id: i64) -> Result<User, AppError>;
    /// Every row, in store-default order. An empty table yields an empty vec.
    async fn find_all_users(&self) -> Result<Vec<User>, AppError>;
}

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create_user(&self, username: &str) -> Result<User, AppError> {
        let sql = "INSERT INTO users (username) VALUES ($1) RETURNING id, username";
        tracing::debug!(sql = %sql, username = %username, "query");
        let user = sqlx::query_as::<_, User>(sql)
            .bind(username)
            .fetch_one(&self.pool)
            .await?;
        Ok(user)
    }

    async fn find_user_by_id(&self, id: i64) -> Result<User, AppError> {
        let sql = "SELECT id, username FROM users WHERE id = $1";
        tracing::debug!(sql = %sql, id = id, "query");
        let user = sqlx::query_as::<_, User>(sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {}", id)))?;
        Ok(user)
    }

    async fn find_all_users(&self) -> Result<Vec<User>, AppError> {
        let sql = "SELECT id, username FROM users";
        tracing::debug!(sql = %sql, "query");
        let users = sqlx::query_as::<_, User>(sql).fetch_all(&self.pool).await?;
        Ok(users)
    }
}
