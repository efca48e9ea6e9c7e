//! Item domain models and parameters.

use crate::{
    model::{
        item::{CreateItemDto, ItemDetailsDto, ItemDto, UpdateItemDto},
        request::RequestItemDto,
    },
    server::model::{booking::Booking, comment::Comment},
};

/// Item listed for sharing by its owner.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub description: String,
    pub available: bool,
    /// Request this item was listed in answer to, if any.
    pub request_id: Option<i32>,
}

impl Item {
    pub fn from_entity(entity: entity::item::Model) -> Self {
        Self {
            id: entity.id,
            owner_id: entity.owner_id,
            name: entity.name,
            description: entity.description,
            available: entity.available,
            request_id: entity.request_id,
        }
    }

    pub fn into_dto(self) -> ItemDto {
        ItemDto {
            id: self.id,
            name: self.name,
            description: self.description,
            available: self.available,
            request_id: self.request_id,
        }
    }

    /// Converts into the form listed under an item request.
    pub fn into_request_item_dto(self, request_id: i32) -> RequestItemDto {
        RequestItemDto {
            id: self.id,
            owner_id: self.owner_id,
            request_id,
            name: self.name,
            description: self.description,
            available: self.available,
        }
    }
}

/// Item with its comments and neighbouring bookings.
///
/// `last_booking` and `next_booking` are only filled in for the item owner.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDetails {
    pub item: Item,
    pub comments: Vec<Comment>,
    pub last_booking: Option<Booking>,
    pub next_booking: Option<Booking>,
}

impl ItemDetails {
    pub fn into_dto(self) -> ItemDetailsDto {
        ItemDetailsDto {
            id: self.item.id,
            name: self.item.name,
            description: self.item.description,
            available: self.item.available,
            request_id: self.item.request_id,
            comments: self.comments.into_iter().map(Comment::into_dto).collect(),
            last_booking: self.last_booking.map(Booking::into_short_dto),
            next_booking: self.next_booking.map(Booking::into_short_dto),
        }
    }
}

/// Parameters for listing a new item.
#[derive(Debug, Clone)]
pub struct CreateItemParams {
    pub owner_id: i32,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub request_id: Option<i32>,
}

impl CreateItemParams {
    pub fn from_dto(owner_id: i32, dto: CreateItemDto) -> Self {
        Self {
            owner_id,
            name: dto.name,
            description: dto.description,
            available: dto.available,
            request_id: dto.request_id,
        }
    }
}

/// Parameters for a partial item update by `requester_id`.
#[derive(Debug, Clone)]
pub struct UpdateItemParams {
    pub id: i32,
    pub requester_id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

impl UpdateItemParams {
    pub fn from_dto(id: i32, requester_id: i32, dto: UpdateItemDto) -> Self {
        Self {
            id,
            requester_id,
            name: dto.name,
            description: dto.description,
            available: dto.available,
        }
    }
}
