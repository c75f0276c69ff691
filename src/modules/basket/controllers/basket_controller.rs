use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::core::{PageQuery, SuccessMessage};
use crate::modules::basket::models::{BasketCount, BasketRequest};
use crate::modules::basket::services::BasketService;

/// Add a product to a user's basket
/// POST /basket
pub async fn add_to_basket(
    service: web::Data<Arc<BasketService>>,
    request: web::Json<BasketRequest>,
) -> Result<HttpResponse, AppError> {
    let key = request.key();
    let count = service
        .add_product_to_basket(key.user_id, key.product_id)
        .await?;

    Ok(HttpResponse::Ok().json(BasketCount { count }))
}

/// List one page of a user's basket
/// GET /basket/{user_id}?page=N
pub async fn get_basket_page(
    service: web::Data<Arc<BasketService>>,
    path: web::Path<i64>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let products = service
        .get_page_of_products_from_basket(path.into_inner(), query.page)
        .await?;

    Ok(HttpResponse::Ok().json(products))
}

/// GET /basket/{user_id}/products/{product_id}
pub async fn basket_contains(
    service: web::Data<Arc<BasketService>>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, AppError> {
    let (user_id, product_id) = path.into_inner();
    let in_basket = service.contains_product(user_id, product_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "in_basket": in_basket })))
}

/// DELETE /basket/{user_id}/products/{product_id}
pub async fn delete_from_basket(
    service: web::Data<Arc<BasketService>>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, AppError> {
    let (user_id, product_id) = path.into_inner();
    let count = service
        .delete_product_from_basket(user_id, product_id)
        .await?;

    Ok(HttpResponse::Ok().json(BasketCount { count }))
}

/// DELETE /basket/{user_id}
pub async fn clear_basket(
    service: web::Data<Arc<BasketService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.clear_basket(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": SuccessMessage::BASKET_IS_EMPTIED,
    })))
}

/// Configure basket routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/basket")
            .route("", web::post().to(add_to_basket))
            .route("/{user_id}", web::get().to(get_basket_page))
            .route("/{user_id}", web::delete().to(clear_basket))
            .route("/{user_id}/products/{product_id}", web::get().to(basket_contains))
            .route(
                "/{user_id}/products/{product_id}",
                web::delete().to(delete_from_basket),
            ),
    );
}
