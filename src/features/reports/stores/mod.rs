mod memory;
mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::reports::models::{NewReport, Report};
use crate::shared::types::ResolvedPage;

pub use memory::InMemoryReportStore;
pub use postgres::PgReportStore;

/// Persistence contract for reports
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// One page of a category's reports, newest `created_at` first.
    async fn list(&self, category_id: Uuid, page: ResolvedPage) -> Result<Vec<Report>>;

    /// Persist a report under a fresh id, stamped with the creation time.
    ///
    /// Fails with `AppError::NotCreated` when the write affects no row.
    async fn create(&self, data: NewReport) -> Result<Report>;

    /// Fails with `AppError::NotFound` when nothing was deleted.
    async fn delete(&self, id: Uuid) -> Result<()>;
}

/// Current time at the microsecond precision Postgres `timestamptz` keeps.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
