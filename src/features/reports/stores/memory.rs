use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{NewReport, Report};
use crate::features::reports::stores::{now, ReportStore};
use crate::shared::types::ResolvedPage;

#[derive(Default)]
struct ReportTable {
    rows: Vec<Report>,
    last_created_at: Option<DateTime<Utc>>,
}

impl ReportTable {
    /// Creation timestamps are strictly increasing even when the clock is not.
    fn next_created_at(&mut self) -> DateTime<Utc> {
        let mut created_at = now();
        if let Some(last) = self.last_created_at {
            if created_at <= last {
                created_at = last + Duration::microseconds(1);
            }
        }
        self.last_created_at = Some(created_at);
        created_at
    }
}

/// Process-local report store
#[derive(Default)]
pub struct InMemoryReportStore {
    table: RwLock<ReportTable>,
}

impl InMemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&self, data: NewReport, id: Uuid) -> Result<Report> {
        let mut table = self
            .table
            .write()
            .map_err(|_| AppError::Internal("report store lock poisoned".to_string()))?;

        if table.rows.iter().any(|r| r.id == id) {
            return Err(AppError::NotCreated(format!("report {} not created", id)));
        }

        let report = Report {
            id,
            category_id: data.category_id,
            post_id: data.post_id,
            comment_id: data.comment_id,
            reason: data.reason,
            created_at: table.next_created_at(),
        };

        table.rows.push(report.clone());
        Ok(report)
    }
}

#[async_trait]
impl ReportStore for InMemoryReportStore {
    async fn list(&self, category_id: Uuid, page: ResolvedPage) -> Result<Vec<Report>> {
        let table = self
            .table
            .read()
            .map_err(|_| AppError::Internal("report store lock poisoned".to_string()))?;

        let mut reports: Vec<&Report> = table
            .rows
            .iter()
            .filter(|r| r.category_id == category_id)
            .collect();
        reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let (skip, take) = page.window();
        Ok(reports.into_iter().skip(skip).take(take).cloned().collect())
    }

    async fn create(&self, data: NewReport) -> Result<Report> {
        self.insert(data, Uuid::new_v4())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut table = self
            .table
            .write()
            .map_err(|_| AppError::Internal("report store lock poisoned".to_string()))?;

        let position = table
            .rows
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound("report not found".to_string()))?;

        table.rows.remove(position);
        Ok(())
    }
}
