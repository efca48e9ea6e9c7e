//! Item request data repository.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    item::Item,
    request::{CreateItemRequestParams, ItemRequest},
};

pub struct ItemRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new request stamped with `created`.
    ///
    /// # Returns
    /// - `Ok(ItemRequest)` - The created request with no items
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        params: CreateItemRequestParams,
        created: DateTime<Utc>,
    ) -> Result<ItemRequest, DbErr> {
        let entity = entity::item_request::ActiveModel {
            description: ActiveValue::Set(params.description),
            created: ActiveValue::Set(created),
            creator_id: ActiveValue::Set(params.creator_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ItemRequest::from_entity(entity, Vec::new()))
    }

    /// Finds a request by id together with the items offered for it.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<ItemRequest>, DbErr> {
        let Some(entity) = entity::prelude::ItemRequest::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.with_items(vec![entity]).await?.pop())
    }

    /// Gets every request created by `creator_id`, newest first.
    pub async fn get_by_creator(&self, creator_id: i32) -> Result<Vec<ItemRequest>, DbErr> {
        let entities = entity::prelude::ItemRequest::find()
            .filter(entity::item_request::Column::CreatorId.eq(creator_id))
            .order_by_desc(entity::item_request::Column::Created)
            .order_by_desc(entity::item_request::Column::Id)
            .all(self.db)
            .await?;

        self.with_items(entities).await
    }

    /// Gets one page of the requests created by anyone but `user_id`, newest first.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user whose own requests are excluded
    /// - `page` - Page number (0-indexed)
    /// - `per_page` - Number of requests per page
    pub async fn get_others_paginated(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<ItemRequest>, DbErr> {
        let entities = entity::prelude::ItemRequest::find()
            .filter(entity::item_request::Column::CreatorId.ne(user_id))
            .order_by_desc(entity::item_request::Column::Created)
            .order_by_desc(entity::item_request::Column::Id)
            .paginate(self.db, per_page)
            .fetch_page(page)
            .await?;

        self.with_items(entities).await
    }

    /// Checks whether a request with the given id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ItemRequest::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Attaches the offered items to each request, preserving order.
    async fn with_items(
        &self,
        requests: Vec<entity::item_request::Model>,
    ) -> Result<Vec<ItemRequest>, DbErr> {
        if requests.is_empty() {
            return Ok(Vec::new());
        }

        let request_ids: Vec<i32> = requests.iter().map(|r| r.id).collect();

        let mut items_by_request: HashMap<i32, Vec<Item>> = HashMap::new();
        for item in entity::prelude::Item::find()
            .filter(entity::item::Column::RequestId.is_in(request_ids))
            .order_by_asc(entity::item::Column::Id)
            .all(self.db)
            .await?
        {
            if let Some(request_id) = item.request_id {
                items_by_request
                    .entry(request_id)
                    .or_default()
                    .push(Item::from_entity(item));
            }
        }

        Ok(requests
            .into_iter()
            .map(|request| {
                let items = items_by_request.remove(&request.id).unwrap_or_default();
                ItemRequest::from_entity(request, items)
            })
            .collect())
    }
}
