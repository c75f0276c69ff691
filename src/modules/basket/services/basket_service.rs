use std::sync::Arc;

use tracing::{error, info};

use crate::core::{AppError, InsertOutcome, PageRequest, Result};
use crate::modules::basket::models::BasketKey;
use crate::modules::basket::repositories::BasketRepository;
use crate::modules::products::models::ProductInfo;
use crate::modules::products::repositories::ProductRepository;
use crate::modules::users::repositories::UserRepository;

/// Service for basket membership
pub struct BasketService {
    basket_repo: Arc<dyn BasketRepository>,
    product_repo: Arc<dyn ProductRepository>,
    user_repo: Arc<dyn UserRepository>,
    page_size: u32,
}

impl BasketService {
    pub fn new(
        basket_repo: Arc<dyn BasketRepository>,
        product_repo: Arc<dyn ProductRepository>,
        user_repo: Arc<dyn UserRepository>,
        page_size: u32,
    ) -> Self {
        Self {
            basket_repo,
            product_repo,
            user_repo,
            page_size,
        }
    }

    /// Put a product into the user's basket and return the new entry count
    pub async fn add_product_to_basket(&self, user_id: i64, product_id: i64) -> Result<i64> {
        if !self.user_repo.exists_by_id(user_id).await? {
            return Err(AppError::UserNotFound);
        }

        if !self.product_repo.exists_by_id(product_id).await? {
            return Err(AppError::ProductNotFound);
        }

        match self
            .basket_repo
            .insert(BasketKey::new(user_id, product_id))
            .await?
        {
            InsertOutcome::Inserted => {}
            InsertOutcome::Duplicate => return Err(AppError::ProductAlreadyInBasket),
            // user or product deleted since the checks above
            InsertOutcome::MissingReference => {
                return Err(if self.user_repo.exists_by_id(user_id).await? {
                    AppError::ProductNotFound
                } else {
                    AppError::UserNotFound
                });
            }
        }

        let count = self.basket_repo.count_by_user_id(user_id).await?;
        info!(user_id, product_id, count, "Product added to basket");

        Ok(count)
    }

    /// One page of the user's basket, projected to product info.
    ///
    /// An empty page fails with `BasketIsEmpty`, whether the basket has no
    /// entries at all or `page_number` lies past the last entry.
    pub async fn get_page_of_products_from_basket(
        &self,
        user_id: i64,
        page_number: u32,
    ) -> Result<Vec<ProductInfo>> {
        let entries = self
            .basket_repo
            .find_page_by_user_id(user_id, PageRequest::new(page_number, self.page_size))
            .await?;

        if entries.is_empty() {
            return Err(AppError::BasketIsEmpty);
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
                        "Basket entry references a missing product"
                    );
                    AppError::inconsistent(format!(
                        "basket of user {} references missing product {}",
                        user_id, entry.product_id
                    ))
                })?;
            products.push(ProductInfo::from(product));
        }

        Ok(products)
    }

    /// Whether the product is in the user's basket
    pub async fn contains_product(&self, user_id: i64, product_id: i64) -> Result<bool> {
        Ok(self
            .basket_repo
            .find_by_key(BasketKey::new(user_id, product_id))
            .await?
            .is_some())
    }

    /// Remove one product and return the new entry count
    pub async fn delete_product_from_basket(&self, user_id: i64, product_id: i64) -> Result<i64> {
        if !self
            .basket_repo
            .delete(BasketKey::new(user_id, product_id))
            .await?
        {
            return Err(AppError::ProductNotInBasket);
        }

        let count = self.basket_repo.count_by_user_id(user_id).await?;
        info!(user_id, product_id, count, "Product removed from basket");

        Ok(count)
    }

    /// Remove every entry of the user's basket
    pub async fn clear_basket(&self, user_id: i64) -> Result<()> {
        let removed = self.basket_repo.delete_all_by_user_id(user_id).await?;

        if removed == 0 {
            return Err(AppError::BasketIsEmpty);
        }
        info!(user_id, removed, "Basket cleared");

        Ok(())
    }
}
