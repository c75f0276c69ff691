use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::{InsertOutcome, PageRequest, Result};
use crate::modules::favourites::models::{FavouriteEntry, FavouriteKey};

/// Data access for favourites entries
#[async_trait]
pub trait FavouritesRepository: Send + Sync {
    async fn find_by_key(&self, key: FavouriteKey) -> Result<Option<FavouriteEntry>>;

    /// Reports a duplicate key or a missing user/product instead of failing
    async fn insert(&self, key: FavouriteKey) -> Result<InsertOutcome>;

    async fn count_by_user_id(&self, user_id: i64) -> Result<i64>;

    /// Returns false when there was no such entry
    async fn delete(&self, key: FavouriteKey) -> Result<bool>;

    /// Entries ordered by product id
    async fn find_page_by_user_id(
        &self,
        user_id: i64,
        page: PageRequest,
    ) -> Result<Vec<FavouriteEntry>>;

    /// Remove every entry of the user in one statement, returning how many went
    async fn delete_all_by_user_id(&self, user_id: i64) -> Result<u64>;
}

/// MySQL-backed favourites repository
#[derive(Clone)]
pub struct MySqlFavouritesRepository {
    pool: MySqlPool,
}

impl MySqlFavouritesRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavouritesRepository for MySqlFavouritesRepository {
    async fn find_by_key(&self, key: FavouriteKey) -> Result<Option<FavouriteEntry>> {
        let entry = sqlx::query_as::<_, FavouriteEntry>(
            "SELECT user_id, product_id FROM favourites WHERE user_id = ? AND product_id = ?",
        )
        .bind(key.user_id)
        .bind(key.product_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entry)
    }

    async fn insert(&self, key: FavouriteKey) -> Result<InsertOutcome> {
        let result = sqlx::query("INSERT INTO favourites (user_id, product_id) VALUES (?, ?)")
            .bind(key.user_id)
            .bind(key.product_id)
            .execute(&self.pool)
            .await;

        InsertOutcome::from_execute(result)
    }

    async fn count_by_user_id(&self, user_id: i64) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM favourites WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn delete(&self, key: FavouriteKey) -> Result<bool> {
        let result = sqlx::query("DELETE FROM favourites WHERE user_id = ? AND product_id = ?")
            .bind(key.user_id)
            .bind(key.product_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_page_by_user_id(
        &self,
        user_id: i64,
        page: PageRequest,
    ) -> Result<Vec<FavouriteEntry>> {
        let entries = sqlx::query_as::<_, FavouriteEntry>(
            r#"
            SELECT user_id, product_id
            FROM favourites
            WHERE user_id = ?
            ORDER BY product_id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(user_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn delete_all_by_user_id(&self, user_id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM favourites WHERE user_id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
