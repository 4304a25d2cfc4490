//! User routes.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::users::{create_user, find_all_users, find_user_by_id};
use crate::service::UserService;

pub fn user_routes(service: Arc<dyn UserService>) -> Router {
    Router::new()
        .route("/users", post(create_user).get(find_all_users))
        .route("/users/:id", get(find_user_by_id))
        .with_state(service)
}
