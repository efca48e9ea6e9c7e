//! Item service for business logic.
//!
//! Handles item listing and editing by owners, item views with comments and
//! neighbouring bookings, search, and comments by past bookers.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        booking::BookingRepository, comment::CommentRepository, item::ItemRepository,
        item_request::ItemRequestRepository,
    },
    error::AppError,
    model::{
        comment::{Comment, CreateCommentParams},
        item::{CreateItemParams, Item, ItemDetails, UpdateItemParams},
        page::Page,
    },
    service::user::UserService,
};

pub struct ItemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a new item for `params.owner_id`.
    ///
    /// # Returns
    /// - `Ok(Item)` - Created item
    /// - `Err(AppError::NotFound)` - Owner or referenced request does not exist
    pub async fn create(&self, params: CreateItemParams) -> Result<Item, AppError> {
        UserService::new(self.db)
            .ensure_exists(params.owner_id)
            .await?;

        if let Some(request_id) = params.request_id {
            if !ItemRequestRepository::new(self.db).exists(request_id).await? {
                return Err(AppError::NotFound(format!(
                    "Request with id {} not found",
                    request_id
                )));
            }
        }

        Ok(ItemRepository::new(self.db).create(params).await?)
    }

    /// Applies a partial update to an item owned by `params.requester_id`.
    ///
    /// # Returns
    /// - `Ok(Item)` - Updated item
    /// - `Err(AppError::NotFound)` - Item does not exist
    /// - `Err(AppError::Forbidden)` - Requester is not the owner
    pub async fn update(&self, params: UpdateItemParams) -> Result<Item, AppError> {
        let item_repo = ItemRepository::new(self.db);

        let item = self.get_item(params.id).await?;
        ensure_owner(&item, params.requester_id)?;

        Ok(item_repo.update(params).await?)
    }

    /// Deletes an item owned by `requester_id`.
    ///
    /// # Returns
    /// - `Ok(())` - Item deleted along with its bookings and comments
    /// - `Err(AppError::NotFound)` - Item does not exist
    /// - `Err(AppError::Forbidden)` - Requester is not the owner
    pub async fn delete(&self, id: i32, requester_id: i32) -> Result<(), AppError> {
        let item = self.get_item(id).await?;
        ensure_owner(&item, requester_id)?;

        ItemRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    /// Gets an item with its comments.
    ///
    /// The last and next bookings are only included when `requester_id` owns the item.
    ///
    /// # Returns
    /// - `Ok(ItemDetails)` - Item view for the requester
    /// - `Err(AppError::NotFound)` - Requester or item does not exist
    pub async fn get_by_id(&self, id: i32, requester_id: i32) -> Result<ItemDetails, AppError> {
        UserService::new(self.db).ensure_exists(requester_id).await?;

        let item = self.get_item(id).await?;
        let include_bookings = item.owner_id == requester_id;

        let mut details = self.with_details(vec![item], include_bookings).await?;

        details
            .pop()
            .ok_or_else(|| AppError::InternalError(format!("Item {} lost while loading", id)))
    }

    /// Gets one page of the items owned by `owner_id`, each with comments and
    /// its last and next bookings.
    ///
    /// # Returns
    /// - `Ok(Vec<ItemDetails>)` - Owner's items ordered by id
    /// - `Err(AppError::NotFound)` - Owner does not exist
    pub async fn get_owned(&self, owner_id: i32, page: Page) -> Result<Vec<ItemDetails>, AppError> {
        UserService::new(self.db).ensure_exists(owner_id).await?;

        let items = ItemRepository::new(self.db)
            .get_by_owner_paginated(owner_id, page.index(), page.size)
            .await?;

        self.with_details(items, true).await
    }

    /// Searches available items by text in name or description.
    ///
    /// Blank text matches nothing.
    ///
    /// # Returns
    /// - `Ok(Vec<Item>)` - Matching items, possibly empty
    /// - `Err(AppError::NotFound)` - Requester does not exist
    pub async fn search(
        &self,
        requester_id: i32,
        text: &str,
        page: Page,
    ) -> Result<Vec<Item>, AppError> {
        UserService::new(self.db).ensure_exists(requester_id).await?;

        let text = text.trim();
        if text.is_empty() {
            return Ok(Vec::new());
        }

        Ok(ItemRepository::new(self.db)
            .search_available(text, page.index(), page.size)
            .await?)
    }

    /// Posts a comment on an item.
    ///
    /// The author must have an approved booking of this item that has already ended.
    ///
    /// # Returns
    /// - `Ok(Comment)` - Created comment
    /// - `Err(AppError::NotFound)` - Author or item does not exist
    /// - `Err(AppError::BadRequest)` - Author has no finished approved booking of the item
    pub async fn add_comment(&self, params: CreateCommentParams) -> Result<Comment, AppError> {
        UserService::new(self.db)
            .ensure_exists(params.author_id)
            .await?;
        self.get_item(params.item_id).await?;

        let now = Utc::now();
        let eligible = BookingRepository::new(self.db)
            .has_finished_approved(params.author_id, params.item_id, now)
            .await?;
        if !eligible {
            return Err(AppError::BadRequest(format!(
                "User {} has no finished booking of item {}",
                params.author_id, params.item_id
            )));
        }

        Ok(CommentRepository::new(self.db).create(params, now).await?)
    }

    async fn get_item(&self, id: i32) -> Result<Item, AppError> {
        ItemRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Item with id {} not found", id)))
    }

    /// Attaches comments and, when `include_bookings` is set, last/next bookings.
    async fn with_details(
        &self,
        items: Vec<Item>,
        include_bookings: bool,
    ) -> Result<Vec<ItemDetails>, AppError> {
        let item_ids: Vec<i32> = items.iter().map(|i| i.id).collect();

        let mut comments: HashMap<i32, Vec<Comment>> = HashMap::new();
        for comment in CommentRepository::new(self.db)
            .get_by_item_ids(item_ids.clone())
            .await?
        {
            comments.entry(comment.item_id).or_default().push(comment);
        }

        let (mut last, mut next) = if include_bookings {
            let booking_repo = BookingRepository::new(self.db);
            let now = Utc::now();
            (
                booking_repo.get_last_for_items(item_ids.clone(), now).await?,
                booking_repo.get_next_for_items(item_ids, now).await?,
            )
        } else {
            Default::default()
        };

        Ok(items
            .into_iter()
            .map(|item| ItemDetails {
                comments: comments.remove(&item.id).unwrap_or_default(),
                last_booking: last.remove(&item.id),
                next_booking: next.remove(&item.id),
                item,
            })
            .collect())
    }
}

fn ensure_owner(item: &Item, requester_id: i32) -> Result<(), AppError> {
    if item.owner_id != requester_id {
        return Err(AppError::Forbidden(format!(
            "User {} does not own item {}",
            requester_id, item.id
        )));
    }

    Ok(())
}
