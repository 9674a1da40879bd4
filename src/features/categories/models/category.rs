use sqlx::FromRow;
use uuid::Uuid;

/// Database model for category
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

/// Data for creating a new category. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub owner_id: Uuid,
    pub name: String,
    pub description: Option<String>,
}
