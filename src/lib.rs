pub mod config;
pub mod controllers;
pub mod error;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod use_cases;

use axum::{routing::get, Router};
use sqlx::postgres::PgPoolOptions;
use std::{sync::Arc, time::Duration};
use tower_http::trace::TraceLayer;

use repositories::{PostgresWebinarRepository, WebinarRepository};

// Shared state для всего приложения
#[derive(Clone)]
pub struct AppState {
    pub webinars: Arc<dyn WebinarRepository>,
    pub config: config::Config,
}

impl AppState {
    /// Подключается к PostgreSQL и накатывает миграции.
    pub async fn new(config: config::Config) -> anyhow::Result<Arc<Self>> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database.pool_size)
            .acquire_timeout(Duration::from_secs(5))
            .connect(&config.database.url)
            .await?;
        tracing::info!("Database connected");

        sqlx::migrate!("./src/migrations").run(&pool).await?;
        tracing::info!("Migrations completed");

        Ok(Self::with_repository(
            config,
            Arc::new(PostgresWebinarRepository::new(pool)),
        ))
    }

    pub fn with_repository(
        config: config::Config,
        webinars: Arc<dyn WebinarRepository>,
    ) -> Arc<Self> {
        Arc::new(Self { webinars, config })
    }
}

/// Главный роутер приложения.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Webinar API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        .merge(controllers::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
