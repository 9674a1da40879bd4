use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{NewReport, Report};
use crate::features::reports::stores::{now, ReportStore};
use crate::shared::types::ResolvedPage;

/// Report store backed by the `reports` table
pub struct PgReportStore {
    pool: PgPool,
}

impl PgReportStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportStore for PgReportStore {
    async fn list(&self, category_id: Uuid, page: ResolvedPage) -> Result<Vec<Report>> {
        sqlx::query_as::<_, Report>(
            r#"
            SELECT id, category_id, post_id, comment_id, reason, created_at
            FROM reports
            WHERE category_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(category_id)
        .bind(page.limit())
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list reports for category {}: {:?}", category_id, e);
            AppError::Database(e)
        })
    }

    async fn create(&self, data: NewReport) -> Result<Report> {
        let report = Report {
            id: Uuid::new_v4(),
            category_id: data.category_id,
            post_id: data.post_id,
            comment_id: data.comment_id,
            reason: data.reason,
            created_at: now(),
        };

        let result = sqlx::query(
            r#"
            INSERT INTO reports (id, category_id, post_id, comment_id, reason, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(report.id)
        .bind(report.category_id)
        .bind(report.post_id)
        .bind(report.comment_id)
        .bind(&report.reason)
        .bind(report.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create report: {:?}", e);
            AppError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotCreated(format!(
                "report {} not created",
                report.id
            )));
        }

        Ok(report)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM reports WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete report {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("report not found".to_string()));
        }

        Ok(())
    }
}
