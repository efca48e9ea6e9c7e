use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatusDto {
    Waiting,
    Approved,
    Rejected,
}

/// Booker summary embedded in a booking.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct BookerDto {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Item summary embedded in a booking.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct BookedItemDto {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct BookingDto {
    pub id: i32,
    #[cfg_attr(feature = "server", schema(value_type = String, example = "2030-01-01T10:00:00"))]
    pub start: NaiveDateTime,
    #[cfg_attr(feature = "server", schema(value_type = String, example = "2030-01-02T10:00:00"))]
    pub end: NaiveDateTime,
    pub status: BookingStatusDto,
    pub booker: BookerDto,
    pub item: BookedItemDto,
}

/// Booking reference used for an item's `lastBooking` and `nextBooking`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BookingShortDto {
    pub id: i32,
    pub booker_id: i32,
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub start: NaiveDateTime,
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub end: NaiveDateTime,
    pub status: BookingStatusDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    pub item_id: i32,
    #[cfg_attr(feature = "server", schema(value_type = String, example = "2030-01-01T10:00:00"))]
    pub start: NaiveDateTime,
    #[cfg_attr(feature = "server", schema(value_type = String, example = "2030-01-02T10:00:00"))]
    pub end: NaiveDateTime,
}
