/// Page size applied when a list request leaves it at zero
pub const DEFAULT_PAGE_SIZE: i32 = 10;

/// Path prefix shared by every RPC method of the service
pub const RPC_SERVICE_PATH: &str = "/rpc/category.Category";
