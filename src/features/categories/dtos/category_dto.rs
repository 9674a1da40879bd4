use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::categories::models::Category;
use crate::shared::types::PageRequest;

/// Request DTO for listing categories
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ListCategoriesRequestDto {
    /// Rows per page. `0` or absent means the default of 10.
    #[serde(default)]
    pub page_size: i32,

    /// Zero-based page number
    #[serde(default)]
    pub page_number: i32,
}

impl ListCategoriesRequestDto {
    pub fn page(&self) -> PageRequest {
        PageRequest::new(self.page_size, self.page_number)
    }
}

/// Request DTO for fetching a single category
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct GetCategoryInfoRequestDto {
    #[serde(default)]
    pub id: String,
}

/// Request DTO for creating a category
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequestDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "category name is required"))]
    pub name: String,

    #[serde(default)]
    pub owner_id: String,

    #[serde(default)]
    pub description: Option<String>,
}

/// Response DTO for category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            owner_id: c.owner_id,
            name: c.name,
            description: c.description,
        }
    }
}

/// Response DTO for a page of categories
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListCategoriesResponseDto {
    pub categories: Vec<CategoryResponseDto>,
    /// Effective page size after defaults
    pub page_size: i32,
    pub page_number: i32,
}
