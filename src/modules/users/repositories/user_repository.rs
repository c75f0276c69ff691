use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::error::is_unique_violation;
use crate::core::{AppError, Result};
use crate::modules::users::models::User;

/// Data access for registered users
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn exists_by_id(&self, id: i64) -> Result<bool>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>>;

    /// Insert a user and return the generated id.
    /// A duplicate email fails with `AppError::EmailAlreadyRegistered`.
    async fn create(&self, name: &str, email: &str) -> Result<i64>;
}

/// MySQL-backed user repository
#[derive(Clone)]
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, created_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create(&self, name: &str, email: &str) -> Result<i64> {
        let result = sqlx::query("INSERT INTO users (name, email) VALUES (?, ?)")
            .bind(name)
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::EmailAlreadyRegistered
                } else {
                    AppError::Database(e)
                }
            })?;

        i64::try_from(result.last_insert_id())
            .map_err(|_| AppError::internal("Generated user id out of range"))
    }
}
