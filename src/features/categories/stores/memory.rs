use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, NewCategory};
use crate::features::categories::stores::CategoryStore;
use crate::shared::types::ResolvedPage;

/// Process-local category store. Lists in insertion order.
#[derive(Default)]
pub struct InMemoryCategoryStore {
    categories: RwLock<Vec<Category>>,
}

impl InMemoryCategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fully formed row, refusing an id that is already taken.
    fn insert(&self, category: Category) -> Result<Category> {
        let mut categories = self
            .categories
            .write()
            .map_err(|_| AppError::Internal("category store lock poisoned".to_string()))?;

        if categories.iter().any(|c| c.id == category.id) {
            return Err(AppError::NotCreated(format!(
                "category {} not created",
                category.id
            )));
        }

        categories.push(category.clone());
        Ok(category)
    }
}

#[async_trait]
impl CategoryStore for InMemoryCategoryStore {
    async fn list(&self, page: ResolvedPage) -> Result<Vec<Category>> {
        let categories = self
            .categories
            .read()
            .map_err(|_| AppError::Internal("category store lock poisoned".to_string()))?;

        let (skip, take) = page.window();
        Ok(categories.iter().skip(skip).take(take).cloned().collect())
    }

    async fn get(&self, id: Uuid) -> Result<Category> {
        let categories = self
            .categories
            .read()
            .map_err(|_| AppError::Internal("category store lock poisoned".to_string()))?;

        categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("category not found".to_string()))
    }

    async fn create(&self, data: NewCategory) -> Result<Category> {
        self.insert(Category {
            id: Uuid::new_v4(),
            owner_id: data.owner_id,
            name: data.name,
            description: data.description,
        })
    }
}
