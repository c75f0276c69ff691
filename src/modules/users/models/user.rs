use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::{AppError, Result};

/// Registered store customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for POST /users
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

impl CreateUserRequest {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("User name cannot be empty"));
        }

        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(AppError::validation(format!("Invalid email address '{}'", email))),
        }
    }
}

/// Response body for a successful registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreated {
    pub id: i64,
    pub message: String,
}
