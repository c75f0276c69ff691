use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::{AppError, Result};

/// Prices are stored as DECIMAL(12, 2)
pub const PRICE_SCALE: u32 = 2;

/// Column widths of the products table, in characters
pub const MAX_NAME_LENGTH: usize = 255;
pub const MAX_IMAGE_URL_LENGTH: usize = 1024;

/// TEXT column limit, in bytes
pub const MAX_DESCRIPTION_BYTES: usize = 65_535;

/// Largest price a DECIMAL(12, 2) column holds: 9999999999.99
pub fn max_price() -> Decimal {
    Decimal::new(999_999_999_999, PRICE_SCALE)
}

/// Catalogue product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing projection shared by catalogue, basket and favourites pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub image_url: String,
}

impl From<Product> for ProductInfo {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            image_url: product.image_url,
        }
    }
}

/// Request body for POST /products and PUT /products/{id}
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    pub image_url: String,
}

impl ProductRequest {
    pub fn validate(&self) -> Result<()> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Product name cannot be empty"));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(AppError::validation(format!(
                "Product name must be at most {} characters",
                MAX_NAME_LENGTH
            )));
        }

        let image_url = self.image_url.trim();
        if image_url.is_empty() {
            return Err(AppError::validation("Product image URL cannot be empty"));
        }
        if image_url.chars().count() > MAX_IMAGE_URL_LENGTH {
            return Err(AppError::validation(format!(
                "Product image URL must be at most {} characters",
                MAX_IMAGE_URL_LENGTH
            )));
        }

        if let Some(description) = &self.description {
            if description.len() > MAX_DESCRIPTION_BYTES {
                return Err(AppError::validation(format!(
                    "Product description must be at most {} bytes",
                    MAX_DESCRIPTION_BYTES
                )));
            }
        }

        if self.price < Decimal::ZERO {
            return Err(AppError::validation("Product price cannot be negative"));
        }

        if self.price > max_price() {
            return Err(AppError::validation(format!(
                "Product price cannot exceed {}",
                max_price()
            )));
        }

        // Trailing zeros do not count: "9.500" is a valid price
        let scale = self.price.normalize().scale();
        if scale > PRICE_SCALE {
            return Err(AppError::validation(format!(
                "Product price must have at most {} decimal places, got {}",
                PRICE_SCALE, scale
            )));
        }

        Ok(())
    }
}

/// Response body for product mutations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductMutation {
    pub id: i64,
    pub message: String,
}
