//! Shape translation between repository entities and API contracts. One
//! repository call per operation; repository errors pass through unchanged.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::dto::{UserRequest, UserResponse};
use crate::error::AppError;
use crate::repository::UserRepository;

#[async_trait]
pub trait UserService: Send + Sync {
    async fn create_user(&self, request: UserRequest) -> Result<UserResponse, AppError>;
    async fn find_user_by_id(&self, id: i64) -> Result<UserResponse, AppError>;
    async fn find_all_users(&self) -> Result<Vec<UserResponse>, AppError>;
}

pub struct UserServiceImpl {
    repository: Arc<dyn UserRepository>,
}

impl UserServiceImpl {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn create_user(&self, request: UserRequest) -> Result<UserResponse, AppError> {
        let user = self.repository.create_user(&request.username).await?;
        Ok(user.into())
    }

    async fn find_user_by_id(&self, id: i64) -> Result<UserResponse, AppError> {
        let user = self.repository.find_user_by_id(id).await?;
        Ok(user.into())
    }

    async fn find_all_users(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = self.repository.find_all_users().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::User;

    struct FailingRepo;

    #[async_trait]
    impl UserRepository for FailingRepo {
        async fn create_user(&self, _username: &str) -> Result<User, AppError> {
            Err(AppError::Db(sqlx::Error::PoolClosed))
        }

        async fn find_user_by_id(&self, id: i64) -> Result<User, AppError> {
            Err(AppError::NotFound(format!("user {}", id)))
        }

        async fn find_all_users(&self) -> Result<Vec<User>, AppError> {
            Err(AppError::Db(sqlx::Error::PoolClosed))
        }
    }

    struct SingleUserRepo;

    #[async_trait]
    impl UserRepository for SingleUserRepo {
        async fn create_user(&self, username: &str) -> Result<User, AppError> {
            Ok(User {
                id: 1,
                username: username.to_string(),
            })
        }

        async fn find_user_by_id(&self, id: i64) -> Result<User, AppError> {
            Ok(User {
                id,
                username: "Arthur".into(),
            })
        }

        async fn find_all_users(&self) -> Result<Vec<User>, AppError> {
            Ok(vec![User {
                id: 1,
                username: "Arthur".into(),
            }])
        }
    }

    #[tokio::test]
    async fn translates_entities_into_responses() {
        let service = UserServiceImpl::new(Arc::new(SingleUserRepo));

        let created = service
            .create_user(UserRequest {
                username: "Ford".into(),
            })
            .await
            .unwrap();
        assert_eq!(created, UserResponse { id: 1, username: "Ford".into() });

        let fetched = service.find_user_by_id(1).await.unwrap();
        assert_eq!(fetched.username, "Arthur");

        let all = service.find_all_users().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn repository_errors_pass_through_unchanged() {
        let service = UserServiceImpl::new(Arc::new(FailingRepo));

        let err = service.find_user_by_id(7).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.to_string(), "not found: user 7");

        let err = service.find_all_users().await.unwrap_err();
        assert!(matches!(err, AppError::Db(_)));
    }
}
