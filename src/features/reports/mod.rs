//! Reports filed against posts and comments, grouped by category.
//!
//! Post and comment ids belong to other services and are only checked for
//! well-formedness.
//!
//! ## RPC methods
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/rpc/category.Category/ListReports` | Page through a category's reports, newest first |
//! | POST | `/rpc/category.Category/CreateReport` | File a report |
//! | POST | `/rpc/category.Category/DeleteReport` | Delete a report by id |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod stores;

pub use services::ReportService;
pub use stores::{InMemoryReportStore, PgReportStore, ReportStore};
