use std::sync::Arc;

use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryRequestDto, GetCategoryInfoRequestDto,
    ListCategoriesRequestDto, ListCategoriesResponseDto,
};
use crate::features::categories::models::NewCategory;
use crate::features::categories::stores::CategoryStore;
use crate::shared::validation::decode_uid;

/// Service for category operations
pub struct CategoryService {
    store: Arc<dyn CategoryStore>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn CategoryStore>) -> Self {
        Self { store }
    }

    /// List one page of categories
    pub async fn list(&self, dto: ListCategoriesRequestDto) -> Result<ListCategoriesResponseDto> {
        let page = dto.page().resolve()?;

        let categories = self.store.list(page).await?;

        Ok(ListCategoriesResponseDto {
            categories: categories.into_iter().map(|c| c.into()).collect(),
            page_size: page.page_size,
            page_number: page.page_number,
        })
    }

    /// Get category by id
    pub async fn get(&self, dto: GetCategoryInfoRequestDto) -> Result<CategoryResponseDto> {
        let id = decode_uid("id", &dto.id)?;

        let category = self.store.get(id).await?;
        Ok(category.into())
    }

    /// Create a new category owned by `owner_id`
    pub async fn create(&self, dto: CreateCategoryRequestDto) -> Result<CategoryResponseDto> {
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let owner_id = decode_uid("owner_id", &dto.owner_id)?;

        let category = self
            .store
            .create(NewCategory {
                owner_id,
                name: dto.name,
                description: dto.description,
            })
            .await?;

        tracing::info!(
            "Category created: id={}, owner_id={}",
            category.id,
            category.owner_id
        );

        Ok(category.into())
    }
}
