use std::sync::Arc;

use tracing::info;

use crate::core::{AppError, PageRequest, Result, SuccessMessage};
use crate::modules::products::models::{Product, ProductInfo, ProductMutation, ProductRequest};
use crate::modules::products::repositories::ProductRepository;

/// Service for catalogue management
pub struct ProductService {
    product_repo: Arc<dyn ProductRepository>,
    page_size: u32,
}

impl ProductService {
    pub fn new(product_repo: Arc<dyn ProductRepository>, page_size: u32) -> Self {
        Self {
            product_repo,
            page_size,
        }
    }

    pub async fn add_product(&self, request: ProductRequest) -> Result<ProductMutation> {
        request.validate()?;

        let id = self.product_repo.create(&request).await?;
        info!(product_id = id, price = %request.price, "Product added");

        Ok(ProductMutation {
            id,
            message: SuccessMessage::PRODUCT_ADDED.to_string(),
        })
    }

    pub async fn update_product(
        &self,
        id: i64,
        request: ProductRequest,
    ) -> Result<ProductMutation> {
        request.validate()?;

        if !self.product_repo.update(id, &request).await? {
            return Err(AppError::ProductNotFound);
        }
        info!(product_id = id, "Product updated");

        Ok(ProductMutation {
            id,
            message: SuccessMessage::PRODUCT_UPDATED.to_string(),
        })
    }

    pub async fn delete_product(&self, id: i64) -> Result<ProductMutation> {
        if !self.product_repo.delete(id).await? {
            return Err(AppError::ProductNotFound);
        }
        info!(product_id = id, "Product deleted");

        Ok(ProductMutation {
            id,
            message: SuccessMessage::PRODUCT_DELETED.to_string(),
        })
    }

    pub async fn get_product(&self, id: i64) -> Result<Product> {
        self.product_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::ProductNotFound)
    }

    /// One catalogue page. An empty page is an empty list, not an error.
    pub async fn get_page_of_products(&self, page_number: u32) -> Result<Vec<ProductInfo>> {
        let products = self
            .product_repo
            .find_page(PageRequest::new(page_number, self.page_size))
            .await?;

        Ok(products.into_iter().map(ProductInfo::from).collect())
    }
}
