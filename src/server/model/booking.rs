//! Booking domain models, parameters and the `state` listing filter.

use std::str::FromStr;

use chrono::{DateTime, Utc};

pub use entity::booking::BookingStatus;

use crate::{
    model::booking::{
        BookedItemDto, BookerDto, BookingDto, BookingShortDto, BookingStatusDto, CreateBookingDto,
    },
    server::{error::AppError, model::user::User},
};

/// Converts the stored booking status into its wire representation.
pub fn status_into_dto(status: BookingStatus) -> BookingStatusDto {
    match status {
        BookingStatus::Waiting => BookingStatusDto::Waiting,
        BookingStatus::Approved => BookingStatusDto::Approved,
        BookingStatus::Rejected => BookingStatusDto::Rejected,
    }
}

/// Reservation of an item for a time window.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub item_id: i32,
    pub booker_id: i32,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: BookingStatus,
}

impl Booking {
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            item_id: entity.item_id,
            booker_id: entity.booker_id,
            start: entity.start_at,
            end: entity.end_at,
            status: entity.status,
        }
    }

    /// Converts into the short form embedded in item views.
    pub fn into_short_dto(self) -> BookingShortDto {
        BookingShortDto {
            id: self.id,
            booker_id: self.booker_id,
            start: self.start.naive_utc(),
            end: self.end.naive_utc(),
            status: status_into_dto(self.status),
        }
    }
}

/// Item summary carried by a booking, including the owner for access checks.
#[derive(Debug, Clone, PartialEq)]
pub struct BookedItem {
    pub id: i32,
    pub name: String,
    pub owner_id: i32,
}

impl BookedItem {
    pub fn from_entity(entity: entity::item::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            owner_id: entity.owner_id,
        }
    }
}

/// Booking joined with its booker and item.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDetails {
    pub booking: Booking,
    pub booker: User,
    pub item: BookedItem,
}

impl BookingDetails {
    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.booking.id,
            start: self.booking.start.naive_utc(),
            end: self.booking.end.naive_utc(),
            status: status_into_dto(self.booking.status),
            booker: BookerDto {
                id: self.booker.id,
                name: self.booker.name,
                email: self.booker.email,
            },
            item: BookedItemDto {
                id: self.item.id,
                name: self.item.name,
            },
        }
    }
}

/// Parameters for creating a booking.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub item_id: i32,
    pub booker_id: i32,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl CreateBookingParams {
    /// Reads the wire timestamps as UTC.
    pub fn from_dto(booker_id: i32, dto: CreateBookingDto) -> Self {
        Self {
            item_id: dto.item_id,
            booker_id,
            start: dto.start.and_utc(),
            end: dto.end.and_utc(),
        }
    }
}

/// Filter applied when listing bookings of a booker or of an owner's items.
///
/// | state    | statuses           | time window        |
/// |----------|--------------------|--------------------|
/// | ALL      | any                | any                |
/// | PAST     | APPROVED           | end < now          |
/// | FUTURE   | APPROVED, WAITING  | start > now        |
/// | CURRENT  | APPROVED, REJECTED | start < now < end  |
/// | WAITING  | WAITING            | any                |
/// | REJECTED | REJECTED           | any                |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingState {
    #[default]
    All,
    Past,
    Future,
    Current,
    Waiting,
    Rejected,
}

impl BookingState {
    /// Statuses a booking may have to match this state. Empty means any status.
    pub fn statuses(&self) -> &'static [BookingStatus] {
        match self {
            Self::All => &[],
            Self::Past => &[BookingStatus::Approved],
            Self::Future => &[BookingStatus::Approved, BookingStatus::Waiting],
            Self::Current => &[BookingStatus::Approved, BookingStatus::Rejected],
            Self::Waiting => &[BookingStatus::Waiting],
            Self::Rejected => &[BookingStatus::Rejected],
        }
    }
}

impl FromStr for BookingState {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALL" => Ok(Self::All),
            "PAST" => Ok(Self::Past),
            "FUTURE" => Ok(Self::Future),
            "CURRENT" => Ok(Self::Current),
            "WAITING" => Ok(Self::Waiting),
            "REJECTED" => Ok(Self::Rejected),
            other => Err(AppError::BadRequest(format!("Unknown state: {}", other))),
        }
    }
}
