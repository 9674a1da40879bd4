use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::RpcJson;
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryRequestDto, GetCategoryInfoRequestDto,
    ListCategoriesRequestDto, ListCategoriesResponseDto,
};
use crate::features::categories::services::CategoryService;
use crate::shared::types::ApiResponse;

/// List categories
///
/// A zero or absent `page_size` falls back to 10. Pages past the end are empty.
#[utoipa::path(
    post,
    path = "/rpc/category.Category/ListCategories",
    request_body = ListCategoriesRequestDto,
    responses(
        (status = 200, description = "Page of categories", body = ApiResponse<ListCategoriesResponseDto>),
        (status = 400, description = "Negative page size or number")
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
    RpcJson(dto): RpcJson<ListCategoriesRequestDto>,
) -> Result<Json<ApiResponse<ListCategoriesResponseDto>>> {
    let response = service.list(dto).await?;
    Ok(Json(ApiResponse::success(Some(response), None)))
}

/// Get category by id
#[utoipa::path(
    post,
    path = "/rpc/category.Category/GetCategoryInfo",
    request_body = GetCategoryInfoRequestDto,
    responses(
        (status = 200, description = "Category found", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Invalid UUID"),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category_info(
    State(service): State<Arc<CategoryService>>,
    RpcJson(dto): RpcJson<GetCategoryInfoRequestDto>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let category = service.get(dto).await?;
    Ok(Json(ApiResponse::success(Some(category), None)))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/rpc/category.Category/CreateCategory",
    request_body = CreateCategoryRequestDto,
    responses(
        (status = 200, description = "Category created", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Missing name or invalid owner UUID"),
        (status = 500, description = "Category could not be stored")
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(service): State<Arc<CategoryService>>,
    RpcJson(dto): RpcJson<CreateCategoryRequestDto>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let category = service.create(dto).await?;
    Ok(Json(ApiResponse::success(Some(category), None)))
}
