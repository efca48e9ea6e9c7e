//! Item data repository.

use sea_orm::{
    sea_query::{self, Condition, Expr, LikeExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::item::{CreateItemParams, Item, UpdateItemParams};

pub struct ItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new item for `params.owner_id`.
    ///
    /// # Returns
    /// - `Ok(Item)` - The created item
    /// - `Err(DbErr)` - Database error, including foreign key violations for an
    ///   unknown owner or request
    pub async fn create(&self, params: CreateItemParams) -> Result<Item, DbErr> {
        let entity = entity::item::ActiveModel {
            owner_id: ActiveValue::Set(params.owner_id),
            name_lower: ActiveValue::Set(params.name.to_lowercase()),
            description_lower: ActiveValue::Set(params.description.to_lowercase()),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            available: ActiveValue::Set(params.available),
            request_id: ActiveValue::Set(params.request_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Item::from_entity(entity))
    }

    /// Finds an item by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Item>, DbErr> {
        let entity = entity::prelude::Item::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Item::from_entity))
    }

    /// Gets one page of the items owned by `owner_id`, ordered by id.
    ///
    /// # Arguments
    /// - `owner_id` - Id of the owning user
    /// - `page` - Page number (0-indexed)
    /// - `per_page` - Number of items per page
    pub async fn get_by_owner_paginated(
        &self,
        owner_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<Item>, DbErr> {
        let entities = entity::prelude::Item::find()
            .filter(entity::item::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::item::Column::Id)
            .paginate(self.db, per_page)
            .fetch_page(page)
            .await?;

        Ok(entities.into_iter().map(Item::from_entity).collect())
    }

    /// Searches available items whose name or description contains `text`.
    ///
    /// Matching ignores letter case, including non-ASCII letters, by comparing
    /// against the lowercased copies stored on insert and update. `%`, `_` and
    /// `\` in `text` match literally. Results are ordered by id.
    ///
    /// # Arguments
    /// - `text` - Non-blank search text
    /// - `page` - Page number (0-indexed)
    /// - `per_page` - Number of items per page
    pub async fn search_available(
        &self,
        text: &str,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<Item>, DbErr> {
        let pattern = format!("%{}%", escape_like(&text.to_lowercase()));

        let entities = entity::prelude::Item::find()
            .filter(entity::item::Column::Available.eq(true))
            .filter(
                Condition::any()
                    .add(sea_query::ExprTrait::like(
                        Expr::col(entity::item::Column::NameLower),
                        LikeExpr::new(pattern.as_str()).escape('\\'),
                    ))
                    .add(sea_query::ExprTrait::like(
                        Expr::col(entity::item::Column::DescriptionLower),
                        LikeExpr::new(pattern.as_str()).escape('\\'),
                    )),
            )
            .order_by_asc(entity::item::Column::Id)
            .paginate(self.db, per_page)
            .fetch_page(page)
            .await?;

        Ok(entities.into_iter().map(Item::from_entity).collect())
    }

    /// Applies a partial update to an item.
    ///
    /// Ownership is checked by the service before calling this.
    ///
    /// # Returns
    /// - `Ok(Item)` - The updated item
    /// - `Err(DbErr::RecordNotFound)` - No item with `params.id`
    pub async fn update(&self, params: UpdateItemParams) -> Result<Item, DbErr> {
        let item = entity::prelude::Item::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Item {} not found", params.id)))?;

        let mut active_model: entity::item::ActiveModel = item.into();

        if let Some(name) = params.name {
            active_model.name_lower = ActiveValue::Set(name.to_lowercase());
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active_model.description_lower = ActiveValue::Set(description.to_lowercase());
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(available) = params.available {
            active_model.available = ActiveValue::Set(available);
        }

        let entity = active_model.update(self.db).await?;

        Ok(Item::from_entity(entity))
    }

    /// Deletes an item, cascading to its bookings and comments.
    ///
    /// # Returns
    /// - `Ok(true)` - Item deleted
    /// - `Ok(false)` - No item with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Item::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

/// Escapes `LIKE` wildcards so `text` only matches itself, using `\` as the escape character.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
