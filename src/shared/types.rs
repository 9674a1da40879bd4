use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::error::{AppError, Result};
use crate::shared::constants::DEFAULT_PAGE_SIZE;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub errors: Option<Vec<String>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>) -> Self {
        Self {
            success: true,
            data,
            message,
            errors: None,
        }
    }

    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            errors,
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Pagination values as they arrive on the wire.
///
/// Page numbers are zero-based. A page size of `0` means "use the default".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub page_size: i32,
    pub page_number: i32,
}

/// A page request after defaults are applied, ready for a `LIMIT`/`OFFSET` query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPage {
    /// Effective page size, echoed back to the caller
    pub page_size: i32,
    pub page_number: i32,
    /// Rows to skip, computed in `i64` so large page numbers cannot overflow
    pub offset: i64,
}

impl PageRequest {
    pub fn new(page_size: i32, page_number: i32) -> Self {
        Self {
            page_size,
            page_number,
        }
    }

    /// Apply the default page size and compute the row offset.
    ///
    /// Negative values are rejected instead of being handed to the store as a
    /// negative `LIMIT`/`OFFSET`.
    pub fn resolve(self) -> Result<ResolvedPage> {
        if self.page_size < 0 {
            return Err(AppError::Validation(
                "page_size must not be negative".to_string(),
            ));
        }
        if self.page_number < 0 {
            return Err(AppError::Validation(
                "page_number must not be negative".to_string(),
            ));
        }

        let page_size = if self.page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.page_size
        };

        Ok(ResolvedPage {
            page_size,
            page_number: self.page_number,
            offset: i64::from(self.page_number) * i64::from(page_size),
        })
    }
}

impl ResolvedPage {
    /// SQL `LIMIT`
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }

    /// Window bounds for slicing an in-memory collection
    pub fn window(&self) -> (usize, usize) {
        let skip = usize::try_from(self.offset).unwrap_or(usize::MAX);
        let take = usize::try_from(self.page_size).unwrap_or(0);
        (skip, take)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_page_size_uses_default() {
        let page = PageRequest::new(0, 0).resolve().unwrap();
        assert_eq!(page.page_size, 10);
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn test_positive_page_size_is_kept() {
        for size in [1, 7, 10, 250, i32::MAX] {
            let page = PageRequest::new(size, 0).resolve().unwrap();
            assert_eq!(page.page_size, size);
        }
    }

    #[test]
    fn test_offset_is_page_number_times_size() {
        for (size, number) in [(0, 3), (5, 0), (5, 4), (25, 17)] {
            let page = PageRequest::new(size, number).resolve().unwrap();
            assert_eq!(page.offset, i64::from(number) * i64::from(page.page_size));
            assert_eq!(page.page_number, number);
        }
    }

    #[test]
    fn test_offset_does_not_overflow() {
        let page = PageRequest::new(i32::MAX, i32::MAX).resolve().unwrap();
        assert_eq!(page.offset, i64::from(i32::MAX) * i64::from(i32::MAX));
    }

    #[test]
    fn test_negative_values_are_rejected() {
        assert!(matches!(
            PageRequest::new(-1, 0).resolve(),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            PageRequest::new(10, -2).resolve(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_window_matches_limit_and_offset() {
        let page = PageRequest::new(3, 2).resolve().unwrap();
        assert_eq!(page.limit(), 3);
        assert_eq!(page.window(), (6, 3));
    }
}
