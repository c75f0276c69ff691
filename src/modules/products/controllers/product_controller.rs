use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::core::PageQuery;
use crate::modules::products::models::ProductRequest;
use crate::modules::products::services::ProductService;

/// Add a product to the catalogue
/// POST /products
pub async fn create_product(
    service: web::Data<Arc<ProductService>>,
    request: web::Json<ProductRequest>,
) -> Result<HttpResponse, AppError> {
    let created = service.add_product(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(created))
}

/// List one catalogue page
/// GET /products?page=N
pub async fn list_products(
    service: web::Data<Arc<ProductService>>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let products = service.get_page_of_products(query.page).await?;

    Ok(HttpResponse::Ok().json(products))
}

/// GET /products/{id}
pub async fn get_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let product = service.get_product(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(product))
}

/// PUT /products/{id}
pub async fn update_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<i64>,
    request: web::Json<ProductRequest>,
) -> Result<HttpResponse, AppError> {
    let updated = service
        .update_product(path.into_inner(), request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /products/{id}
pub async fn delete_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let deleted = service.delete_product(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(deleted))
}

/// Configure product routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .route("", web::post().to(create_product))
            .route("", web::get().to(list_products))
            .route("/{id}", web::get().to(get_product))
            .route("/{id}", web::put().to(update_product))
            .route("/{id}", web::delete().to(delete_product)),
    );
}
