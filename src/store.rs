//! PostgreSQL bootstrap: database creation, pool construction, startup DDL.

use sqlx::postgres::PgPoolOptions;
use sqlx::{ConnectOptions, PgPool};

use crate::config::DbConfig;
use crate::error::AppError;

const USERS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id BIGSERIAL PRIMARY KEY,
    username TEXT NOT NULL UNIQUE
)
"#;

/// Ensure the configured database exists; create it if not. Connects to the
/// maintenance `postgres` database to run CREATE DATABASE.
pub async fn ensure_database_exists(db: &DbConfig) -> Result<(), AppError> {
    if db.name.is_empty() || db.name == "postgres" {
        return Ok(());
    }
    let mut conn = db.admin_connect_options().connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db.name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db.name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db.name, "created database");
    }
    Ok(())
}

/// Build the shared pool with the configured caps and lifetimes.
pub async fn connect_pool(db: &DbConfig) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(db.max_connections)
        .max_lifetime(db.max_lifetime)
        .idle_timeout(db.idle_timeout)
        .connect_with(db.connect_options())
        .await?;
    Ok(pool)
}

/// Idempotent startup DDL for the users table.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(USERS_DDL).execute(pool).await?;
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}
