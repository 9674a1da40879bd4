//! User-created categories that reports are filed under.
//!
//! Categories are created once and never updated or deleted.
//!
//! ## RPC methods
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/rpc/category.Category/ListCategories` | Page through categories |
//! | POST | `/rpc/category.Category/GetCategoryInfo` | Get category by id |
//! | POST | `/rpc/category.Category/CreateCategory` | Create a category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod stores;

pub use services::CategoryService;
pub use stores::{CategoryStore, InMemoryCategoryStore, PgCategoryStore};
