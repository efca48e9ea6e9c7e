use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::booking::BookingShortDto;

/// Item as returned from create, update and search.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub request_id: Option<i32>,
}

/// Item with its comments and, for the owner, the surrounding bookings.
///
/// `last_booking` and `next_booking` are always `null` when the viewer is not
/// the owner of the item.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ItemDetailsDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub request_id: Option<i32>,
    pub comments: Vec<CommentDto>,
    pub last_booking: Option<BookingShortDto>,
    pub next_booking: Option<BookingShortDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateItemDto {
    pub name: String,
    pub description: String,
    pub available: bool,
    #[serde(default)]
    pub request_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub available: Option<bool>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i32,
    pub text: String,
    pub author_name: String,
    #[cfg_attr(feature = "server", schema(value_type = String, example = "2030-01-01T10:00:00"))]
    pub created: NaiveDateTime,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateCommentDto {
    pub text: String,
}
