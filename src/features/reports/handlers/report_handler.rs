use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::RpcJson;
use crate::features::reports::dtos::{
    CreateReportRequestDto, DeleteReportRequestDto, DeleteReportResponseDto,
    ListReportsRequestDto, ListReportsResponseDto, ReportResponseDto,
};
use crate::features::reports::services::ReportService;
use crate::shared::types::ApiResponse;

/// List reports in a category
///
/// Reports are ordered by creation time, newest first.
#[utoipa::path(
    post,
    path = "/rpc/category.Category/ListReports",
    request_body = ListReportsRequestDto,
    responses(
        (status = 200, description = "Page of reports", body = ApiResponse<ListReportsResponseDto>),
        (status = 400, description = "Invalid category UUID or negative page values")
    ),
    tag = "reports"
)]
pub async fn list_reports(
    State(service): State<Arc<ReportService>>,
    RpcJson(dto): RpcJson<ListReportsRequestDto>,
) -> Result<Json<ApiResponse<ListReportsResponseDto>>> {
    let response = service.list(dto).await?;
    Ok(Json(ApiResponse::success(Some(response), None)))
}

/// File a report
#[utoipa::path(
    post,
    path = "/rpc/category.Category/CreateReport",
    request_body = CreateReportRequestDto,
    responses(
        (status = 200, description = "Report created", body = ApiResponse<ReportResponseDto>),
        (status = 400, description = "Missing reason or invalid UUID"),
        (status = 500, description = "Report could not be stored")
    ),
    tag = "reports"
)]
pub async fn create_report(
    State(service): State<Arc<ReportService>>,
    RpcJson(dto): RpcJson<CreateReportRequestDto>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    let report = service.create(dto).await?;
    Ok(Json(ApiResponse::success(Some(report), None)))
}

/// Delete a report
#[utoipa::path(
    post,
    path = "/rpc/category.Category/DeleteReport",
    request_body = DeleteReportRequestDto,
    responses(
        (status = 200, description = "Report deleted", body = ApiResponse<DeleteReportResponseDto>),
        (status = 400, description = "Invalid UUID"),
        (status = 404, description = "Report not found")
    ),
    tag = "reports"
)]
pub async fn delete_report(
    State(service): State<Arc<ReportService>>,
    RpcJson(dto): RpcJson<DeleteReportRequestDto>,
) -> Result<Json<ApiResponse<DeleteReportResponseDto>>> {
    let response = service.delete(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(response),
        Some("Report deleted".to_string()),
    )))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use uuid::Uuid;

    use crate::features::reports::routes::routes;
    use crate::features::reports::services::ReportService;
    use crate::features::reports::stores::InMemoryReportStore;

    fn server() -> TestServer {
        let service = ReportService::new(Arc::new(InMemoryReportStore::new()));
        TestServer::new(routes(Arc::new(service))).unwrap()
    }

    async fn file_report(server: &TestServer, category_id: &str, reason: &str) -> Value {
        let response = server
            .post("/rpc/category.Category/CreateReport")
            .json(&json!({
                "category_id": category_id,
                "post_id": Uuid::new_v4().to_string(),
                "comment_id": Uuid::new_v4().to_string(),
                "reason": reason,
            }))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        body["data"].clone()
    }

    #[tokio::test]
    async fn test_create_and_list_newest_first() {
        let server = server();
        let category_id = Uuid::new_v4().to_string();

        let a = file_report(&server, &category_id, "a").await;
        let b = file_report(&server, &category_id, "b").await;
        let c = file_report(&server, &category_id, "c").await;

        let response = server
            .post("/rpc/category.Category/ListReports")
            .json(&json!({ "category_id": category_id }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["data"]["reports"], json!([c, b, a]));
        assert_eq!(body["data"]["page_size"], 10);
        assert_eq!(body["data"]["page_number"], 0);
    }

    #[tokio::test]
    async fn test_created_at_is_rfc3339() {
        let server = server();
        let report = file_report(&server, &Uuid::new_v4().to_string(), "spam").await;

        let created_at = report["created_at"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
    }

    #[tokio::test]
    async fn test_create_without_reason_is_bad_request() {
        let server = server();
        let response = server
            .post("/rpc/category.Category/CreateReport")
            .json(&json!({
                "category_id": Uuid::new_v4().to_string(),
                "post_id": Uuid::new_v4().to_string(),
                "comment_id": Uuid::new_v4().to_string(),
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_then_delete_again() {
        let server = server();
        let report = file_report(&server, &Uuid::new_v4().to_string(), "spam").await;

        let response = server
            .post("/rpc/category.Category/DeleteReport")
            .json(&json!({ "id": report["id"] }))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"], json!({}));

        let response = server
            .post("/rpc/category.Category/DeleteReport")
            .json(&json!({ "id": report["id"] }))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["message"], "report not found");
    }

    #[tokio::test]
    async fn test_malformed_identifiers_are_bad_request() {
        let server = server();
        let valid = Uuid::new_v4().to_string();

        let requests = [
            ("ListReports", json!({ "category_id": "not-a-uid" })),
            (
                "CreateReport",
                json!({ "category_id": "not-a-uid", "post_id": valid, "comment_id": valid, "reason": "spam" }),
            ),
            (
                "CreateReport",
                json!({ "category_id": valid, "post_id": "not-a-uid", "comment_id": valid, "reason": "spam" }),
            ),
            (
                "CreateReport",
                json!({ "category_id": valid, "post_id": valid, "comment_id": "not-a-uid", "reason": "spam" }),
            ),
            ("DeleteReport", json!({ "id": "not-a-uid" })),
        ];

        for (method, body) in requests {
            let response = server
                .post(&format!("/rpc/category.Category/{}", method))
                .json(&body)
                .await;
            response.assert_status(StatusCode::BAD_REQUEST);
            let body: Value = response.json();
            assert!(body["message"].as_str().unwrap().starts_with("invalid UUID"));
        }
    }
}
