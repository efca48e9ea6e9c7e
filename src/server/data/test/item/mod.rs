use crate::server::{
    data::item::ItemRepository,
    model::item::{CreateItemParams, UpdateItemParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_owner_paginated;
mod search_available;
