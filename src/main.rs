use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use onlinestore::config::{database, AppConfig, Config, LogFormat};
use onlinestore::middleware::{ErrorLogger, RateLimiter, RequestId};
use onlinestore::{modules, AppState, Repositories};

/// RUST_LOG wins over LOG_LEVEL
fn init_tracing(app: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("onlinestore={},actix_web=info", app.log_level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    match app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(&config.app);
    config.validate().context("Configuration validation failed")?;

    tracing::info!("Starting online store service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .context("Failed to create database pool")?;

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.pool_size
    );

    if config.database.run_migrations {
        database::run_migrations(&db_pool)
            .await
            .context("Failed to apply migrations")?;
        tracing::info!("Database migrations applied");
    }

    let state = AppState::new(Repositories::mysql(db_pool.clone()), config.app.page_size);
    let rate_limiter = RateLimiter::new(config.security.rate_limit_per_minute);

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(ErrorLogger)
            .wrap(rate_limiter.clone())
            .wrap(TracingLogger::default())
            .wrap(RequestId)
            .wrap(Cors::permissive())
            .app_data(web::Data::new(db_pool.clone()))
            .configure(|cfg| state.register(cfg))
            .configure(modules::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated with an error")
}
