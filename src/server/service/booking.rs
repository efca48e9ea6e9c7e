//! Booking service for business logic.
//!
//! Enforces the booking rules: bookers cannot reserve their own or unavailable
//! items, windows must lie in the future, only the item owner decides on a
//! waiting booking, and bookings are visible only to their booker and the owner.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{booking::BookingRepository, item::ItemRepository},
    error::AppError,
    model::{
        booking::{BookingDetails, BookingState, BookingStatus, CreateBookingParams},
        page::Page,
    },
    service::user::UserService,
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a waiting booking.
    ///
    /// # Returns
    /// - `Ok(BookingDetails)` - Created booking with booker and item
    /// - `Err(AppError::NotFound)` - Booker or item missing, or booker owns the item
    /// - `Err(AppError::BadRequest)` - Item unavailable or invalid time window
    pub async fn create(&self, params: CreateBookingParams) -> Result<BookingDetails, AppError> {
        UserService::new(self.db)
            .ensure_exists(params.booker_id)
            .await?;

        let item = ItemRepository::new(self.db)
            .get_by_id(params.item_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Item with id {} not found", params.item_id))
            })?;

        if !item.available {
            return Err(AppError::BadRequest(format!(
                "Item {} is not available for booking",
                item.id
            )));
        }

        if item.owner_id == params.booker_id {
            return Err(AppError::NotFound(format!(
                "Item {} cannot be booked by its owner",
                item.id
            )));
        }

        check_window(params.start, params.end, Utc::now())?;

        let booking_repo = BookingRepository::new(self.db);
        let booking = booking_repo.create(params).await?;

        self.get_details(booking.id).await
    }

    /// Approves or rejects a waiting booking.
    ///
    /// # Arguments
    /// - `id` - Booking to decide on
    /// - `requester_id` - Acting user, who must own the booked item
    /// - `approved` - `true` to approve, `false` to reject
    ///
    /// # Returns
    /// - `Ok(BookingDetails)` - Booking with its new status
    /// - `Err(AppError::NotFound)` - Booking does not exist
    /// - `Err(AppError::Forbidden)` - Requester does not own the item
    /// - `Err(AppError::BadRequest)` - Booking is no longer waiting
    pub async fn set_approval(
        &self,
        id: i32,
        requester_id: i32,
        approved: bool,
    ) -> Result<BookingDetails, AppError> {
        let mut details = self.get_details(id).await?;

        if details.item.owner_id != requester_id {
            return Err(AppError::Forbidden(format!(
                "User {} does not own the item of booking {}",
                requester_id, id
            )));
        }

        if details.booking.status != BookingStatus::Waiting {
            return Err(AppError::BadRequest(format!(
                "Booking {} has already been decided",
                id
            )));
        }

        let status = if approved {
            BookingStatus::Approved
        } else {
            BookingStatus::Rejected
        };

        details.booking = BookingRepository::new(self.db)
            .set_status(id, status)
            .await?;

        Ok(details)
    }

    /// Gets a booking visible to `requester_id`.
    ///
    /// # Returns
    /// - `Ok(BookingDetails)` - Requester is the booker or the item owner
    /// - `Err(AppError::NotFound)` - Booking missing or requester is a stranger to it
    pub async fn get_by_id(&self, id: i32, requester_id: i32) -> Result<BookingDetails, AppError> {
        let details = self.get_details(id).await?;

        if details.booker.id != requester_id && details.item.owner_id != requester_id {
            return Err(booking_not_found(id));
        }

        Ok(details)
    }

    /// Lists bookings made by `booker_id` matching `state`, latest start first.
    ///
    /// # Returns
    /// - `Ok(Vec<BookingDetails>)` - Page of matching bookings
    /// - `Err(AppError::NotFound)` - Booker does not exist
    pub async fn get_by_booker(
        &self,
        booker_id: i32,
        state: BookingState,
        page: Page,
    ) -> Result<Vec<BookingDetails>, AppError> {
        UserService::new(self.db).ensure_exists(booker_id).await?;

        Ok(BookingRepository::new(self.db)
            .get_by_booker(booker_id, state, Utc::now(), page.index(), page.size)
            .await?)
    }

    /// Lists bookings of items owned by `owner_id` matching `state`, latest start first.
    ///
    /// # Returns
    /// - `Ok(Vec<BookingDetails>)` - Page of matching bookings
    /// - `Err(AppError::NotFound)` - Owner does not exist
    pub async fn get_by_owner(
        &self,
        owner_id: i32,
        state: BookingState,
        page: Page,
    ) -> Result<Vec<BookingDetails>, AppError> {
        UserService::new(self.db).ensure_exists(owner_id).await?;

        Ok(BookingRepository::new(self.db)
            .get_by_item_owner(owner_id, state, Utc::now(), page.index(), page.size)
            .await?)
    }

    async fn get_details(&self, id: i32) -> Result<BookingDetails, AppError> {
        BookingRepository::new(self.db)
            .get_details_by_id(id)
            .await?
            .ok_or_else(|| booking_not_found(id))
    }
}

/// Validates a requested booking window against `now`.
///
/// Both ends must not lie in the past and the window must not be empty.
fn check_window(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    if start < now {
        return Err(AppError::BadRequest(
            "Booking cannot start in the past".to_string(),
        ));
    }
    if end < now {
        return Err(AppError::BadRequest(
            "Booking cannot end in the past".to_string(),
        ));
    }
    if start >= end {
        return Err(AppError::BadRequest(
            "Booking must start before it ends".to_string(),
        ));
    }

    Ok(())
}

fn booking_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Booking with id {} not found", id))
}
