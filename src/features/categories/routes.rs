use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;
use crate::shared::constants::RPC_SERVICE_PATH;

/// Create routes for the categories feature
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route(
            &format!("{}/ListCategories", RPC_SERVICE_PATH),
            post(handlers::list_categories),
        )
        .route(
            &format!("{}/GetCategoryInfo", RPC_SERVICE_PATH),
            post(handlers::get_category_info),
        )
        .route(
            &format!("{}/CreateCategory", RPC_SERVICE_PATH),
            post(handlers::create_category),
        )
        .with_state(service)
}
