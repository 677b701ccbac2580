use std::sync::Arc;

use axum::{routing::get, Router};
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub mod config;
pub mod error;
pub mod schema;
pub mod handlers {
    pub mod application_dtos;
    pub mod application_handlers;
}
pub mod models {
    pub mod application_models;
}
pub mod repositories {
    pub mod application_repository;
}

use handlers::application_handlers;
use repositories::application_repository::ApplicationRepository;

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub struct AppState {
    pub application_repository: ApplicationRepository,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        Self {
            application_repository: ApplicationRepository::new(pool),
        }
    }
}

pub fn build_pool(database_url: &str) -> anyhow::Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = r2d2::Pool::builder().build(manager)?;
    Ok(pool)
}

pub fn run_migrations(pool: &DbPool) -> anyhow::Result<()> {
    let mut conn = pool.get()?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {e}"))?;
    for version in applied {
        tracing::info!("Applied migration {}", version);
    }
    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

/// API routes. Static hosting and middleware layers are added in `main`.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route(
            "/api/applications/{student_id}",
            get(application_handlers::get_application).put(application_handlers::put_application),
        )
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    // One connection: every new in-memory connection would be a fresh database.
    pub fn memory_pool() -> DbPool {
        let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
        let pool = r2d2::Pool::builder().max_size(1).build(manager).unwrap();
        run_migrations(&pool).unwrap();
        pool
    }

    pub fn memory_state() -> Arc<AppState> {
        Arc::new(AppState::new(memory_pool()))
    }
}
