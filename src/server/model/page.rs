//! Offset-based paging as exposed by the API (`from`, `size`).

use crate::server::error::AppError;

/// Default page size when `size` is omitted.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Validated paging window.
///
/// The API addresses rows by offset (`from`) while the repositories page by index.
/// The page index is `from / size`, so an offset that is not a multiple of `size`
/// selects the page containing that offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub from: u64,
    pub size: u64,
}

impl Page {
    /// Builds a page window, rejecting a zero page size.
    ///
    /// # Returns
    /// - `Ok(Page)` - Valid window
    /// - `Err(AppError::BadRequest)` - `size` is zero
    pub fn new(from: u64, size: u64) -> Result<Self, AppError> {
        if size == 0 {
            return Err(AppError::BadRequest(
                "Page size must be greater than zero".to_string(),
            ));
        }

        Ok(Self { from, size })
    }

    /// Zero-based page index for `Paginator::fetch_page`.
    pub fn index(&self) -> u64 {
        self.from / self.size
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            from: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}
