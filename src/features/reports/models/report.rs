use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for report
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Report {
    pub id: Uuid,
    pub category_id: Uuid,
    pub post_id: Uuid,
    pub comment_id: Uuid,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new report. The store assigns id and created_at.
#[derive(Debug, Clone)]
pub struct NewReport {
    pub category_id: Uuid,
    pub post_id: Uuid,
    pub comment_id: Uuid,
    pub reason: String,
}
