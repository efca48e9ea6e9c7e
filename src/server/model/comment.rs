//! Comment domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::item::CommentDto;

/// Comment left on an item by a past booker.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub item_id: i32,
    pub text: String,
    /// Display name of the author at read time.
    pub author_name: String,
    pub created: DateTime<Utc>,
}

impl Comment {
    /// Converts a comment entity and its author's name into a domain model.
    pub fn from_entity(entity: entity::comment::Model, author_name: String) -> Self {
        Self {
            id: entity.id,
            item_id: entity.item_id,
            text: entity.text,
            author_name,
            created: entity.created,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            text: self.text,
            author_name: self.author_name,
            created: self.created.naive_utc(),
        }
    }
}

/// Parameters for posting a comment on an item.
#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub item_id: i32,
    pub author_id: i32,
    pub text: String,
}
