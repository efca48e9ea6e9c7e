use crate::server::{
    error::AppError,
    model::{
        booking::{BookingState, BookingStatus, CreateBookingParams},
        page::Page,
    },
    service::booking::BookingService,
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory,
    factory::{booking::BookingFactory, item::ItemFactory},
};

mod create;
