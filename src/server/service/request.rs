//! Item request service for business logic.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::item_request::ItemRequestRepository,
    error::AppError,
    model::{
        page::Page,
        request::{CreateItemRequestParams, ItemRequest},
    },
    service::user::UserService,
};

pub struct ItemRequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemRequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a request stamped with the current time.
    ///
    /// # Returns
    /// - `Ok(ItemRequest)` - Created request with no items yet
    /// - `Err(AppError::NotFound)` - Creator does not exist
    pub async fn create(&self, params: CreateItemRequestParams) -> Result<ItemRequest, AppError> {
        UserService::new(self.db)
            .ensure_exists(params.creator_id)
            .await?;

        Ok(ItemRequestRepository::new(self.db)
            .create(params, Utc::now())
            .await?)
    }

    /// Lists the requests created by `user_id`, newest first, with their items.
    pub async fn get_own(&self, user_id: i32) -> Result<Vec<ItemRequest>, AppError> {
        UserService::new(self.db).ensure_exists(user_id).await?;

        Ok(ItemRequestRepository::new(self.db)
            .get_by_creator(user_id)
            .await?)
    }

    /// Lists one page of other users' requests, newest first, with their items.
    pub async fn get_others(&self, user_id: i32, page: Page) -> Result<Vec<ItemRequest>, AppError> {
        UserService::new(self.db).ensure_exists(user_id).await?;

        Ok(ItemRequestRepository::new(self.db)
            .get_others_paginated(user_id, page.index(), page.size)
            .await?)
    }

    /// Gets a single request with its items.
    ///
    /// # Returns
    /// - `Ok(ItemRequest)` - Request found
    /// - `Err(AppError::NotFound)` - Reader or request does not exist
    pub async fn get_by_id(&self, id: i32, user_id: i32) -> Result<ItemRequest, AppError> {
        UserService::new(self.db).ensure_exists(user_id).await?;

        ItemRequestRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Request with id {} not found", id)))
    }
}
