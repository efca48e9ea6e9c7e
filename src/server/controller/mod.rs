//! HTTP request handlers.
//!
//! Controllers extract the acting user from `X-Sharer-User-Id`, convert DTOs into
//! operation parameters, call the matching service and convert the domain result
//! back into a DTO. Extractor failures are turned into `AppError::BadRequest`
//! through `WithRejection` so every error leaves as `{"error": ...}`.

pub mod booking;
pub mod item;
pub mod request;
pub mod user;

use serde::Deserialize;

use crate::server::{
    error::AppError,
    model::page::{Page, DEFAULT_PAGE_SIZE},
};

/// Offset paging query accepted by every listing endpoint.
#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub from: u64,
    #[serde(default = "default_size")]
    pub size: u64,
}

fn default_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl PaginationParams {
    pub fn into_page(self) -> Result<Page, AppError> {
        Page::new(self.from, self.size)
    }
}
