mod memory;
mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::categories::models::{Category, NewCategory};
use crate::shared::types::ResolvedPage;

pub use memory::InMemoryCategoryStore;
pub use postgres::PgCategoryStore;

/// Persistence contract for categories.
///
/// Implementations are the only writers of category state and must be safe
/// to share between concurrent requests.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// One page of categories in store-defined order. An empty page is not an error.
    async fn list(&self, page: ResolvedPage) -> Result<Vec<Category>>;

    /// Fails with `AppError::NotFound` when no category has this id.
    async fn get(&self, id: Uuid) -> Result<Category>;

    /// Persist a category under a freshly generated id.
    ///
    /// Fails with `AppError::NotCreated` when the write affects no row.
    async fn create(&self, data: NewCategory) -> Result<Category>;
}
