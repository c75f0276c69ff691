use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::core::{PageQuery, SuccessMessage};
use crate::modules::favourites::models::{FavouritesCount, FavouriteRequest};
use crate::modules::favourites::services::FavouritesService;

/// Add a product to a user's favourites
/// POST /favourites
pub async fn add_to_favourites(
    service: web::Data<Arc<FavouritesService>>,
    request: web::Json<FavouriteRequest>,
) -> Result<HttpResponse, AppError> {
    let key = request.key();
    let count = service
        .add_product_to_favourites(key.user_id, key.product_id)
        .await?;

    Ok(HttpResponse::Ok().json(FavouritesCount { count }))
}

/// List one page of a user's favourites
/// GET /favourites/{user_id}?page=N
pub async fn get_favourites_page(
    service: web::Data<Arc<FavouritesService>>,
    path: web::Path<i64>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let products = service
        .get_page_of_products_from_favourites(path.into_inner(), query.page)
        .await?;

    Ok(HttpResponse::Ok().json(products))
}

/// GET /favourites/{user_id}/products/{product_id}
pub async fn favourites_contains(
    service: web::Data<Arc<FavouritesService>>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, AppError> {
    let (user_id, product_id) = path.into_inner();
    let in_favourites = service.contains_product(user_id, product_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "in_favourites": in_favourites })))
}

/// DELETE /favourites/{user_id}/products/{product_id}
pub async fn delete_from_favourites(
    service: web::Data<Arc<FavouritesService>>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, AppError> {
    let (user_id, product_id) = path.into_inner();
    let count = service
        .delete_product_from_favourites(user_id, product_id)
        .await?;

    Ok(HttpResponse::Ok().json(FavouritesCount { count }))
}

/// DELETE /favourites/{user_id}
pub async fn clear_favourites(
    service: web::Data<Arc<FavouritesService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.clear_favourites(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": SuccessMessage::FAVOURITES_IS_EMPTIED,
    })))
}

/// Configure favourites routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/favourites")
            .route("", web::post().to(add_to_favourites))
            .route("/{user_id}", web::get().to(get_favourites_page))
            .route("/{user_id}", web::delete().to(clear_favourites))
            .route("/{user_id}/products/{product_id}", web::get().to(favourites_contains))
            .route(
                "/{user_id}/products/{product_id}",
                web::delete().to(delete_from_favourites),
            ),
    );
}
