//! Booking factory for creating test booking entities.
//!
//! Bookings default to a waiting reservation starting in one day and lasting one day.
//! Use `past()`, `current()` or explicit `start`/`end` to place them in time.

use chrono::{DateTime, Duration, Utc};
use entity::booking::BookingStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::booking::BookingFactory;
///
/// let booking = BookingFactory::new(&db, item.id, booker.id)
///     .past()
///     .status(BookingStatus::Approved)
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    item_id: i32,
    booker_id: i32,
    start_at: DateTime<Utc>,
    end_at: DateTime<Utc>,
    status: BookingStatus,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - start_at: now + 1 day
    /// - end_at: now + 2 days
    /// - status: `Waiting`
    pub fn new(db: &'a DatabaseConnection, item_id: i32, booker_id: i32) -> Self {
        let now = Utc::now();
        Self {
            db,
            item_id,
            booker_id,
            start_at: now + Duration::days(1),
            end_at: now + Duration::days(2),
            status: BookingStatus::Waiting,
        }
    }

    pub fn start(mut self, start_at: DateTime<Utc>) -> Self {
        self.start_at = start_at;
        self
    }

    pub fn end(mut self, end_at: DateTime<Utc>) -> Self {
        self.end_at = end_at;
        self
    }

    pub fn status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    /// Places the booking two days to one day before now.
    pub fn past(self) -> Self {
        let now = Utc::now();
        self.start(now - Duration::days(2)).end(now - Duration::days(1))
    }

    /// Places the booking around now: started an hour ago, ending in an hour.
    pub fn current(self) -> Self {
        let now = Utc::now();
        self.start(now - Duration::hours(1))
            .end(now + Duration::hours(1))
    }

    /// Builds and inserts the booking entity into the database.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            id: ActiveValue::NotSet,
            item_id: ActiveValue::Set(self.item_id),
            booker_id: ActiveValue::Set(self.booker_id),
            start_at: ActiveValue::Set(self.start_at),
            end_at: ActiveValue::Set(self.end_at),
            status: ActiveValue::Set(self.status),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a waiting future booking of `item_id` by `booker_id`.
pub async fn create_booking(
    db: &DatabaseConnection,
    item_id: i32,
    booker_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, item_id, booker_id).build().await
}
