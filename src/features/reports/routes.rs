use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::reports::handlers;
use crate::features::reports::services::ReportService;
use crate::shared::constants::RPC_SERVICE_PATH;

/// Create routes for the reports feature
pub fn routes(service: Arc<ReportService>) -> Router {
    Router::new()
        .route(
            &format!("{}/ListReports", RPC_SERVICE_PATH),
            post(handlers::list_reports),
        )
        .route(
            &format!("{}/CreateReport", RPC_SERVICE_PATH),
            post(handlers::create_report),
        )
        .route(
            &format!("{}/DeleteReport", RPC_SERVICE_PATH),
            post(handlers::delete_report),
        )
        .with_state(service)
}
