use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::reports::models::Report;
use crate::shared::types::PageRequest;

/// Request DTO for listing a category's reports
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ListReportsRequestDto {
    #[serde(default)]
    pub category_id: String,

    /// Rows per page. `0` or absent means the default of 10.
    #[serde(default)]
    pub page_size: i32,

    /// Zero-based page number
    #[serde(default)]
    pub page_number: i32,
}

impl ListReportsRequestDto {
    pub fn page(&self) -> PageRequest {
        PageRequest::new(self.page_size, self.page_number)
    }
}

/// Request DTO for filing a report
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateReportRequestDto {
    #[serde(default)]
    pub category_id: String,

    #[serde(default)]
    pub post_id: String,

    #[serde(default)]
    pub comment_id: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "report reason is required"))]
    pub reason: String,
}

/// Request DTO for deleting a report
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct DeleteReportRequestDto {
    #[serde(default)]
    pub id: String,
}

/// Response DTO for report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReportResponseDto {
    pub id: Uuid,
    pub category_id: Uuid,
    pub post_id: Uuid,
    pub comment_id: Uuid,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

impl From<Report> for ReportResponseDto {
    fn from(r: Report) -> Self {
        Self {
            id: r.id,
            category_id: r.category_id,
            post_id: r.post_id,
            comment_id: r.comment_id,
            reason: r.reason,
            created_at: r.created_at,
        }
    }
}

/// Response DTO for a page of reports
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListReportsResponseDto {
    pub reports: Vec<ReportResponseDto>,
    /// Effective page size after defaults
    pub page_size: i32,
    pub page_number: i32,
}

/// Empty acknowledgement of a deleted report
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct DeleteReportResponseDto {}
