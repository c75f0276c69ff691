use std::sync::Arc;

use tracing::info;

use crate::core::{AppError, Result, SuccessMessage};
use crate::modules::users::models::{CreateUserRequest, User, UserCreated};
use crate::modules::users::repositories::UserRepository;

/// Service for user registration and lookup
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn register(&self, request: CreateUserRequest) -> Result<UserCreated> {
        request.validate()?;

        let id = self
            .user_repo
            .create(request.name.trim(), request.email.trim())
            .await?;

        info!(user_id = id, "User registered");

        Ok(UserCreated {
            id,
            message: SuccessMessage::USER_ADDED.to_string(),
        })
    }

    pub async fn get_user(&self, id: i64) -> Result<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::UserNotFound)
    }
}
