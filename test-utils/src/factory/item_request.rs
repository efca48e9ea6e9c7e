//! Item request factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test item requests.
pub struct ItemRequestFactory<'a> {
    db: &'a DatabaseConnection,
    creator_id: i32,
    description: String,
    created: DateTime<Utc>,
}

impl<'a> ItemRequestFactory<'a> {
    /// Creates a new ItemRequestFactory.
    ///
    /// Defaults:
    /// - description: `"Looking for item {n}"`
    /// - created: now
    pub fn new(db: &'a DatabaseConnection, creator_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            creator_id,
            description: format!("Looking for item {}", id),
            created: Utc::now(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Overrides the creation timestamp, used to test ordering.
    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }

    pub async fn build(self) -> Result<entity::item_request::Model, DbErr> {
        entity::item_request::ActiveModel {
            id: ActiveValue::NotSet,
            description: ActiveValue::Set(self.description),
            created: ActiveValue::Set(self.created),
            creator_id: ActiveValue::Set(self.creator_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a request by `creator_id` with default values.
pub async fn create_item_request(
    db: &DatabaseConnection,
    creator_id: i32,
) -> Result<entity::item_request::Model, DbErr> {
    ItemRequestFactory::new(db, creator_id).build().await
}
