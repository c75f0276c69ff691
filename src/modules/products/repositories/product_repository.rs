use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::{AppError, PageRequest, Result};
use crate::modules::products::models::{Product, ProductRequest};

/// Data access for catalogue products
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn exists_by_id(&self, id: i64) -> Result<bool>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>>;

    /// Products ordered by id
    async fn find_page(&self, page: PageRequest) -> Result<Vec<Product>>;

    /// Insert a product and return the generated id
    async fn create(&self, product: &ProductRequest) -> Result<i64>;

    /// Returns false when no product has the given id
    async fn update(&self, id: i64, product: &ProductRequest) -> Result<bool>;

    /// Returns false when no product has the given id
    async fn delete(&self, id: i64) -> Result<bool>;
}

/// MySQL-backed product repository
#[derive(Clone)]
pub struct MySqlProductRepository {
    pool: MySqlPool,
}

impl MySqlProductRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for MySqlProductRepository {
    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, image_url, created_at, updated_at
            FROM products
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn find_page(&self, page: PageRequest) -> Result<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, image_url, created_at, updated_at
            FROM products
            ORDER BY id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn create(&self, product: &ProductRequest) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO products (name, description, price, image_url)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(product.name.trim())
        .bind(&product.description)
        .bind(product.price)
        .bind(product.image_url.trim())
        .execute(&self.pool)
        .await?;

        i64::try_from(result.last_insert_id())
            .map_err(|_| AppError::internal("Generated product id out of range"))
    }

    async fn update(&self, id: i64, product: &ProductRequest) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = ?, description = ?, price = ?, image_url = ?,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = ?
            "#,
        )
        .bind(product.name.trim())
        .bind(&product.description)
        .bind(product.price)
        .bind(product.image_url.trim())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        // Basket and favourites rows go with it (ON DELETE CASCADE)
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
