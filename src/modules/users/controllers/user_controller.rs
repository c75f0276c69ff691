use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::users::models::CreateUserRequest;
use crate::modules::users::services::UserService;

/// Register a user
/// POST /users
pub async fn create_user(
    service: web::Data<Arc<UserService>>,
    request: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let created = service.register(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(created))
}

/// Get user by ID
/// GET /users/{id}
pub async fn get_user(
    service: web::Data<Arc<UserService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// Configure user routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("", web::post().to(create_user))
            .route("/{id}", web::get().to(get_user)),
    );
}
