use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Item offered in answer to a request.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RequestItemDto {
    pub id: i32,
    pub owner_id: i32,
    pub request_id: i32,
    pub name: String,
    pub description: String,
    pub available: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ItemRequestDto {
    pub id: i32,
    pub description: String,
    #[cfg_attr(feature = "server", schema(value_type = String, example = "2030-01-01T10:00:00"))]
    pub created: NaiveDateTime,
    pub items: Vec<RequestItemDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateItemRequestDto {
    pub description: String,
}
