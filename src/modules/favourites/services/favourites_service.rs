use std::sync::Arc;

use tracing::{error, info};

use crate::core::{AppError, InsertOutcome, PageRequest, Result};
use crate::modules::favourites::models::FavouriteKey;
use crate::modules::favourites::repositories::FavouritesRepository;
use crate::modules::products::models::ProductInfo;
use crate::modules::products::repositories::ProductRepository;
use crate::modules::users::repositories::UserRepository;

/// Service for a user's favourite products
pub struct FavouritesService {
    favourites_repo: Arc<dyn FavouritesRepository>,
    product_repo: Arc<dyn ProductRepository>,
    user_repo: Arc<dyn UserRepository>,
    page_size: u32,
}

impl FavouritesService {
    pub fn new(
        favourites_repo: Arc<dyn FavouritesRepository>,
        product_repo: Arc<dyn ProductRepository>,
        user_repo: Arc<dyn UserRepository>,
        page_size: u32,
    ) -> Self {
        Self {
            favourites_repo,
            product_repo,
            user_repo,
            page_size,
        }
    }

    /// Put a product into the user's favourites and return the new entry count
    pub async fn add_product_to_favourites(&self, user_id: i64, product_id: i64) -> Result<i64> {
        if !self.user_repo.exists_by_id(user_id).await? {
            return Err(AppError::UserNotFound);
        }

        if !self.product_repo.exists_by_id(product_id).await? {
            return Err(AppError::ProductNotFound);
        }

        match self
            .favourites_repo
            .insert(FavouriteKey::new(user_id, product_id))
            .await?
        {
            InsertOutcome::Inserted => {}
            InsertOutcome::Duplicate => return Err(AppError::ProductAlreadyInFavourites),
            // user or product deleted since the checks above
            InsertOutcome::MissingReference => {
                return Err(if self.user_repo.exists_by_id(user_id).await? {
                    AppError::ProductNotFound
                } else {
                    AppError::UserNotFound
                });
            }
        }

        let count = self.favourites_repo.count_by_user_id(user_id).await?;
        info!(user_id, product_id, count, "Product added to favourites");

        Ok(count)
    }

    /// Same paging contract as the basket: an empty page is `FavouritesIsEmpty`
    pub async fn get_page_of_products_from_favourites(
        &self,
        user_id: i64,
        page_number: u32,
    ) -> Result<Vec<ProductInfo>> {
        let entries = self
            .favourites_repo
            .find_page_by_user_id(user_id, PageRequest::new(page_number, self.page_size))
            .await?;

        if entries.is_empty() {
            return Err(AppError::FavouritesIsEmpty);
        }

        let mut products = Vec::with_capacity(entries.len());
        for entry in entries {
            let product = self
                .product_repo
                .find_by_id(entry.product_id)
                .await?
                .ok_or_else(|| {
                    error!(
                        user_id,
                        product_id = entry.product_id,
                        "Favourites entry references a missing product"
                    );
                    AppError::inconsistent(format!(
                        "favourites of user {} references missing product {}",
                        user_id, entry.product_id
                    ))
                })?;
            products.push(ProductInfo::from(product));
        }

        Ok(products)
    }

    /// Whether the product is in the user's favourites
    pub async fn contains_product(&self, user_id: i64, product_id: i64) -> Result<bool> {
        Ok(self
            .favourites_repo
            .find_by_key(FavouriteKey::new(user_id, product_id))
            .await?
            .is_some())
    }

    /// Remove one product and return the new entry count
    pub async fn delete_product_from_favourites(
        &self,
        user_id: i64,
        product_id: i64,
    ) -> Result<i64> {
        if !self
            .favourites_repo
            .delete(FavouriteKey::new(user_id, product_id))
            .await?
        {
            return Err(AppError::ProductNotInFavourites);
        }

        let count = self.favourites_repo.count_by_user_id(user_id).await?;
        info!(user_id, product_id, count, "Product removed from favourites");

        Ok(count)
    }

    /// Remove every entry of the user's favourites
    pub async fn clear_favourites(&self, user_id: i64) -> Result<()> {
        let removed = self.favourites_repo.delete_all_by_user_id(user_id).await?;

        if removed == 0 {
            return Err(AppError::FavouritesIsEmpty);
        }
        info!(user_id, removed, "Favourites cleared");

        Ok(())
    }
}
