use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;

/// Liveness response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
}

/// Readiness response
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub database: bool,
}

/// GET /health - Liveness probe, never touches the database
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// GET /ready - Readiness probe, requires a working database connection
pub async fn readiness_check(pool: web::Data<MySqlPool>) -> impl Responder {
    let database = match sqlx::query("SELECT 1").fetch_one(pool.get_ref()).await {
        Ok(_) => true,
        Err(e) => {
            tracing::error!(error = %e, "Database readiness check failed");
            false
        }
    };

    let response = ReadinessResponse {
        ready: database,
        database,
    };

    if response.ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
