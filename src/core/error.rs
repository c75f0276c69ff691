use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

use crate::core::messages::ErrorMessage;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Validation errors for request payloads
    #[error("Validation error: {0}")]
    Validation(String),

    /// Database operation errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Generic resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{}", ErrorMessage::USER_NOT_FOUND)]
    UserNotFound,

    #[error("{}", ErrorMessage::PRODUCT_NOT_FOUND)]
    ProductNotFound,

    #[error("{}", ErrorMessage::PRODUCT_ALREADY_IN_BASKET)]
    ProductAlreadyInBasket,

    #[error("{}", ErrorMessage::PRODUCT_NOT_IN_BASKET)]
    ProductNotInBasket,

    #[error("{}", ErrorMessage::BASKET_IS_EMPTY)]
    BasketIsEmpty,

    #[error("{}", ErrorMessage::PRODUCT_ALREADY_IN_FAVOURITES)]
    ProductAlreadyInFavourites,

    #[error("{}", ErrorMessage::PRODUCT_NOT_IN_FAVOURITES)]
    ProductNotInFavourites,

    #[error("{}", ErrorMessage::FAVOURITES_IS_EMPTY)]
    FavouritesIsEmpty,

    #[error("{}", ErrorMessage::EMAIL_ALREADY_REGISTERED)]
    EmailAlreadyRegistered,

    /// Stored rows reference data that no longer exists
    #[error("Inconsistent state: {0}")]
    Inconsistent(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable machine-readable name of the failure kind
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::UserNotFound => "USER_NOT_FOUND",
            AppError::ProductNotFound => "PRODUCT_NOT_FOUND",
            AppError::ProductAlreadyInBasket => "PRODUCT_ALREADY_IN_BASKET",
            AppError::ProductNotInBasket => "PRODUCT_NOT_IN_BASKET",
            AppError::BasketIsEmpty => "BASKET_IS_EMPTY",
            AppError::ProductAlreadyInFavourites => "PRODUCT_ALREADY_IN_FAVOURITES",
            AppError::ProductNotInFavourites => "PRODUCT_NOT_IN_FAVOURITES",
            AppError::FavouritesIsEmpty => "FAVOURITES_IS_EMPTY",
            AppError::EmailAlreadyRegistered => "EMAIL_ALREADY_REGISTERED",
            AppError::Inconsistent(_) => "INCONSISTENT_STATE",
            AppError::RateLimitExceeded(_) => "RATE_LIMIT_EXCEEDED",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Json(_) => "JSON_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "message": error_message,
                "kind": self.kind(),
                "code": status_code.as_u16(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_)
            | AppError::UserNotFound
            | AppError::ProductNotFound
            | AppError::ProductNotInBasket
            | AppError::BasketIsEmpty
            | AppError::ProductNotInFavourites
            | AppError::FavouritesIsEmpty => StatusCode::NOT_FOUND,
            AppError::ProductAlreadyInBasket
            | AppError::ProductAlreadyInFavourites
            | AppError::EmailAlreadyRegistered => StatusCode::CONFLICT,
            AppError::Inconsistent(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::RateLimitExceeded(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Json(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn inconsistent(msg: impl Into<String>) -> Self {
        AppError::Inconsistent(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

/// True when a database error is a unique/primary key violation
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|db_err| db_err.is_unique_violation())
        .unwrap_or(false)
}
