//! Booking data repository.
//!
//! Listings return `BookingDetails`, loading the booker and item of each page of
//! bookings with one query per table rather than one per booking.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};

use crate::server::model::{
    booking::{
        BookedItem, Booking, BookingDetails, BookingState, BookingStatus, CreateBookingParams,
    },
    user::User,
};

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new booking in the `Waiting` status.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The created booking
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateBookingParams) -> Result<Booking, DbErr> {
        let entity = entity::booking::ActiveModel {
            item_id: ActiveValue::Set(params.item_id),
            booker_id: ActiveValue::Set(params.booker_id),
            start_at: ActiveValue::Set(params.start),
            end_at: ActiveValue::Set(params.end),
            status: ActiveValue::Set(BookingStatus::Waiting),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Booking::from_entity(entity))
    }

    /// Finds a booking by id together with its booker and item.
    ///
    /// # Returns
    /// - `Ok(Some(BookingDetails))` - Booking found
    /// - `Ok(None)` - No booking with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_details_by_id(&self, id: i32) -> Result<Option<BookingDetails>, DbErr> {
        let Some(entity) = entity::prelude::Booking::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.with_details(vec![entity]).await?.pop())
    }

    /// Sets the status of a booking.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The updated booking
    /// - `Err(DbErr::RecordNotFound)` - No booking with that id
    pub async fn set_status(&self, id: i32, status: BookingStatus) -> Result<Booking, DbErr> {
        let booking = entity::prelude::Booking::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Booking {} not found", id)))?;

        let mut active_model: entity::booking::ActiveModel = booking.into();
        active_model.status = ActiveValue::Set(status);

        let entity = active_model.update(self.db).await?;

        Ok(Booking::from_entity(entity))
    }

    /// Gets one page of the bookings made by `booker_id` matching `state`.
    ///
    /// Results are ordered by start, latest first.
    ///
    /// # Arguments
    /// - `booker_id` - Id of the booking user
    /// - `state` - Status and time filter
    /// - `now` - Reference instant for time-based states
    /// - `page` - Page number (0-indexed)
    /// - `per_page` - Number of bookings per page
    pub async fn get_by_booker(
        &self,
        booker_id: i32,
        state: BookingState,
        now: DateTime<Utc>,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<BookingDetails>, DbErr> {
        let query = entity::prelude::Booking::find()
            .filter(entity::booking::Column::BookerId.eq(booker_id));

        let entities = filter_by_state(query, state, now)
            .order_by_desc(entity::booking::Column::StartAt)
            .paginate(self.db, per_page)
            .fetch_page(page)
            .await?;

        self.with_details(entities).await
    }

    /// Gets one page of the bookings of items owned by `owner_id` matching `state`.
    ///
    /// Results are ordered by start, latest first.
    pub async fn get_by_item_owner(
        &self,
        owner_id: i32,
        state: BookingState,
        now: DateTime<Utc>,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<BookingDetails>, DbErr> {
        let query = entity::prelude::Booking::find()
            .join(JoinType::InnerJoin, entity::booking::Relation::Item.def())
            .filter(entity::item::Column::OwnerId.eq(owner_id));

        let entities = filter_by_state(query, state, now)
            .order_by_desc(entity::booking::Column::StartAt)
            .paginate(self.db, per_page)
            .fetch_page(page)
            .await?;

        self.with_details(entities).await
    }

    /// Finds, per item, the booking that most recently ended before `now`, whatever its status.
    ///
    /// # Returns
    /// - `Ok(HashMap)` - Item id to its last booking; items without one are absent
    pub async fn get_last_for_items(
        &self,
        item_ids: Vec<i32>,
        now: DateTime<Utc>,
    ) -> Result<HashMap<i32, Booking>, DbErr> {
        if item_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::Booking::find()
            .filter(entity::booking::Column::ItemId.is_in(item_ids))
            .filter(entity::booking::Column::EndAt.lt(now))
            .order_by_desc(entity::booking::Column::EndAt)
            .all(self.db)
            .await?;

        Ok(first_per_item(entities))
    }

    /// Finds, per item, the booking starting soonest after `now`, whatever its status.
    ///
    /// # Returns
    /// - `Ok(HashMap)` - Item id to its next booking; items without one are absent
    pub async fn get_next_for_items(
        &self,
        item_ids: Vec<i32>,
        now: DateTime<Utc>,
    ) -> Result<HashMap<i32, Booking>, DbErr> {
        if item_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::Booking::find()
            .filter(entity::booking::Column::ItemId.is_in(item_ids))
            .filter(entity::booking::Column::StartAt.gt(now))
            .order_by_asc(entity::booking::Column::StartAt)
            .all(self.db)
            .await?;

        Ok(first_per_item(entities))
    }

    /// Checks whether `booker_id` has an approved booking of `item_id` that ended before `now`.
    pub async fn has_finished_approved(
        &self,
        booker_id: i32,
        item_id: i32,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Booking::find()
            .filter(entity::booking::Column::BookerId.eq(booker_id))
            .filter(entity::booking::Column::ItemId.eq(item_id))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Approved))
            .filter(entity::booking::Column::EndAt.lt(now))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Loads bookers and items for a list of bookings, preserving order.
    async fn with_details(
        &self,
        bookings: Vec<entity::booking::Model>,
    ) -> Result<Vec<BookingDetails>, DbErr> {
        if bookings.is_empty() {
            return Ok(Vec::new());
        }

        let booker_ids: Vec<i32> = bookings.iter().map(|b| b.booker_id).collect();
        let item_ids: Vec<i32> = bookings.iter().map(|b| b.item_id).collect();

        let bookers: HashMap<i32, entity::user::Model> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(booker_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let items: HashMap<i32, entity::item::Model> = entity::prelude::Item::find()
            .filter(entity::item::Column::Id.is_in(item_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|i| (i.id, i))
            .collect();

        bookings
            .into_iter()
            .map(|booking| {
                let booker = bookers.get(&booking.booker_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!("Booker {} not found", booking.booker_id))
                })?;
                let item = items.get(&booking.item_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!("Item {} not found", booking.item_id))
                })?;

                Ok(BookingDetails {
                    booking: Booking::from_entity(booking),
                    booker: User::from_entity(booker),
                    item: BookedItem::from_entity(item),
                })
            })
            .collect()
    }
}

/// Restricts a booking query to the statuses and time window of `state`.
fn filter_by_state(
    query: Select<entity::booking::Entity>,
    state: BookingState,
    now: DateTime<Utc>,
) -> Select<entity::booking::Entity> {
    let statuses = state.statuses();
    let query = if statuses.is_empty() {
        query
    } else {
        query.filter(entity::booking::Column::Status.is_in(statuses.iter().copied()))
    };

    match state {
        BookingState::Past => query.filter(entity::booking::Column::EndAt.lt(now)),
        BookingState::Future => query.filter(entity::booking::Column::StartAt.gt(now)),
        BookingState::Current => query
            .filter(entity::booking::Column::StartAt.lt(now))
            .filter(entity::booking::Column::EndAt.gt(now)),
        BookingState::All | BookingState::Waiting | BookingState::Rejected => query,
    }
}

/// Keeps the first booking seen for each item of an already ordered list.
fn first_per_item(bookings: Vec<entity::booking::Model>) -> HashMap<i32, Booking> {
    let mut by_item = HashMap::new();

    for booking in bookings {
        by_item
            .entry(booking.item_id)
            .or_insert_with(|| Booking::from_entity(booking));
    }

    by_item
}
