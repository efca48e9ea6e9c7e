//! Item request domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{model::request::ItemRequestDto, server::model::item::Item};

/// Request by a user for an item nobody has listed yet, with the items offered since.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRequest {
    pub id: i32,
    pub description: String,
    pub created: DateTime<Utc>,
    pub creator_id: i32,
    pub items: Vec<Item>,
}

impl ItemRequest {
    pub fn from_entity(entity: entity::item_request::Model, items: Vec<Item>) -> Self {
        Self {
            id: entity.id,
            description: entity.description,
            created: entity.created,
            creator_id: entity.creator_id,
            items,
        }
    }

    pub fn into_dto(self) -> ItemRequestDto {
        let request_id = self.id;

        ItemRequestDto {
            id: self.id,
            description: self.description,
            created: self.created.naive_utc(),
            items: self
                .items
                .into_iter()
                .map(|item| item.into_request_item_dto(request_id))
                .collect(),
        }
    }
}

/// Parameters for creating an item request.
#[derive(Debug, Clone)]
pub struct CreateItemRequestParams {
    pub creator_id: i32,
    pub description: String,
}
