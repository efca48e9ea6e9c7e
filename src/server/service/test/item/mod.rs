use crate::server::{
    error::AppError,
    model::{
        booking::BookingStatus,
        comment::CreateCommentParams,
        item::{CreateItemParams, UpdateItemParams},
        page::Page,
    },
    service::item::ItemService,
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory,
    factory::{booking::BookingFactory, item::ItemFactory},
};

mod create;
mod get_owned;
mod update_delete;
