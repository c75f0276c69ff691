use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Composite key of a basket entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BasketKey {
    pub user_id: i64,
    pub product_id: i64,
}

impl BasketKey {
    pub fn new(user_id: i64, product_id: i64) -> Self {
        Self {
            user_id,
            product_id,
        }
    }
}

/// "Product is in the user's basket". Created by add, removed by delete or
/// clear, never updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct BasketEntry {
    pub user_id: i64,
    pub product_id: i64,
}

impl From<BasketKey> for BasketEntry {
    fn from(key: BasketKey) -> Self {
        Self {
            user_id: key.user_id,
            product_id: key.product_id,
        }
    }
}

/// Request body for POST /basket
#[derive(Debug, Clone, Deserialize)]
pub struct BasketRequest {
    pub user_id: i64,
    pub product_id: i64,
}

impl BasketRequest {
    pub fn key(&self) -> BasketKey {
        BasketKey::new(self.user_id, self.product_id)
    }
}

/// Number of entries left in a user's basket after a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasketCount {
    pub count: i64,
}
