use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::reports::{dtos as reports_dtos, handlers as reports_handlers};
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        categories_handlers::get_category_info,
        categories_handlers::create_category,
        // Reports
        reports_handlers::list_reports,
        reports_handlers::create_report,
        reports_handlers::delete_report,
    ),
    components(
        schemas(
            // Categories
            categories_dtos::ListCategoriesRequestDto,
            categories_dtos::GetCategoryInfoRequestDto,
            categories_dtos::CreateCategoryRequestDto,
            categories_dtos::CategoryResponseDto,
            categories_dtos::ListCategoriesResponseDto,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            ApiResponse<categories_dtos::ListCategoriesResponseDto>,
            // Reports
            reports_dtos::ListReportsRequestDto,
            reports_dtos::CreateReportRequestDto,
            reports_dtos::DeleteReportRequestDto,
            reports_dtos::ReportResponseDto,
            reports_dtos::ListReportsResponseDto,
            reports_dtos::DeleteReportResponseDto,
            ApiResponse<reports_dtos::ReportResponseDto>,
            ApiResponse<reports_dtos::ListReportsResponseDto>,
            ApiResponse<reports_dtos::DeleteReportResponseDto>,
        )
    ),
    tags(
        (name = "categories", description = "User-created report categories"),
        (name = "reports", description = "Reports filed against posts and comments"),
    ),
    info(
        title = "Category Service API",
        version = "0.1.0",
        description = "RPC methods for report categories and reports",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_rpc_method_is_documented() {
        let doc = ApiDoc::openapi();
        for method in [
            "ListCategories",
            "GetCategoryInfo",
            "CreateCategory",
            "ListReports",
            "CreateReport",
            "DeleteReport",
        ] {
            let path = format!("/rpc/category.Category/{}", method);
            assert!(doc.paths.paths.contains_key(&path), "missing {}", path);
        }
    }

    #[test]
    fn test_info_modifier_overrides_title() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Moderation".to_string(),
            version: "9.9.9".to_string(),
            description: "internal".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Moderation");
        assert_eq!(doc.info.version, "9.9.9");
    }
}
