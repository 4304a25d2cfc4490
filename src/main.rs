use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use user_backend::{
    app_router, connect_pool, ensure_database_exists, ensure_schema, AppConfig, AppState,
    PgUserRepository, UserRepository, UserService, UserServiceImpl,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; the environment itself may carry the vars.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("user_backend=info".parse()?))
        .init();

    let config = AppConfig::from_env()?;
    ensure_database_exists(&config.db).await?;
    let pool = connect_pool(&config.db).await?;
    ensure_schema(&pool).await?;
    tracing::info!("connected to database");

    let repository: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(pool.clone()));
    let service: Arc<dyn UserService> = Arc::new(UserServiceImpl::new(repository));
    let state = AppState { service, pool };

    let app = app_router(state);

    let listener = TcpListener::bind(("0.0.0.0", config.listen_port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
