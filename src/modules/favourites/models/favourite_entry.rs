use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Composite key of a favourites entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FavouriteKey {
    pub user_id: i64,
    pub product_id: i64,
}

impl FavouriteKey {
    pub fn new(user_id: i64, product_id: i64) -> Self {
        Self {
            user_id,
            product_id,
        }
    }
}

/// A product the user marked as a favourite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct FavouriteEntry {
    pub user_id: i64,
    pub product_id: i64,
}

impl From<FavouriteKey> for FavouriteEntry {
    fn from(key: FavouriteKey) -> Self {
        Self {
            user_id: key.user_id,
            product_id: key.product_id,
        }
    }
}

/// Request body for POST /favourites
#[derive(Debug, Clone, Deserialize)]
pub struct FavouriteRequest {
    pub user_id: i64,
    pub product_id: i64,
}

impl FavouriteRequest {
    pub fn key(&self) -> FavouriteKey {
        FavouriteKey::new(self.user_id, self.product_id)
    }
}

/// Number of favourites a user has left after a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavouritesCount {
    pub count: i64,
}
