//! User handlers: the only layer aware of transport concerns. Parse and
//! validate input here; everything past the service call is shape translation.

use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::domain::dto::UserRequest;
use crate::error::AppError;
use crate::service::UserService;

/// POST /users. 400 before the service is ever invoked when the body is
/// malformed or `username` is missing/empty; 201 with the created user on
/// success.
pub async fn create_user(
    State(service): State<Arc<dyn UserService>>,
    body: Result<Json<UserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    if request.username.is_empty() {
        return Err(AppError::Validation("username is required".into()));
    }
    let user = service.create_user(request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users/:id. The id must parse as an unsigned integer; anything else is
/// 400 without touching the store.
pub async fn find_user_by_id(
    State(service): State<Arc<dyn UserService>>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let user = service.find_user_by_id(id).await?;
    Ok((StatusCode::OK, Json(user)))
}

/// GET /users. The empty table is a successful empty array.
pub async fn find_all_users(
    State(service): State<Arc<dyn UserService>>,
) -> Result<impl IntoResponse, AppError> {
    let users = service.find_all_users().await?;
    Ok((StatusCode::OK, Json(users)))
}

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    let id: u64 = id_str
        .parse()
        .map_err(|_| AppError::BadRequest("invalid id".into()))?;
    i64::try_from(id).map_err(|_| AppError::BadRequest("invalid id".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_unsigned_ids() {
        assert_eq!(parse_id("1").unwrap(), 1);
        assert_eq!(parse_id("999").unwrap(), 999);
    }

    #[test]
    fn rejects_everything_else() {
        assert!(parse_id("abc").is_err());
        assert!(parse_id("-1").is_err());
        assert!(parse_id("1.5").is_err());
        assert!(parse_id("").is_err());
        // Larger than i64: parses as u64 but cannot be a row id.
        assert!(parse_id("9223372036854775808").is_err());
    }
}
