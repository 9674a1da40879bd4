use std::sync::Arc;
use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::core::config::{DatabaseConfig, StorageBackend, StorageConfig};
use crate::features::categories::{CategoryStore, InMemoryCategoryStore, PgCategoryStore};
use crate::features::reports::{InMemoryReportStore, PgReportStore, ReportStore};

pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect(&config.url)
        .await
}

/// Store handles shared by every request
pub struct Stores {
    pub categories: Arc<dyn CategoryStore>,
    pub reports: Arc<dyn ReportStore>,
}

/// Bind the store interfaces to the configured backend.
///
/// Both stores share one connection pool when Postgres is selected.
pub async fn create_stores(
    storage: &StorageConfig,
    database: Option<&DatabaseConfig>,
) -> anyhow::Result<Stores> {
    match storage.backend {
        StorageBackend::Postgres => {
            let database = database
                .ok_or_else(|| anyhow::anyhow!("Postgres backend selected without DATABASE_URL"))?;
            let pool = create_pool(database).await?;
            tracing::info!(
                "Database connection pool created (max_connections={})",
                database.max_connections
            );

            Ok(Stores {
                categories: Arc::new(PgCategoryStore::new(pool.clone())),
                reports: Arc::new(PgReportStore::new(pool)),
            })
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory stores; all data is lost on shutdown");

            Ok(Stores {
                categories: Arc::new(InMemoryCategoryStore::new()),
                reports: Arc::new(InMemoryReportStore::new()),
            })
        }
    }
}
