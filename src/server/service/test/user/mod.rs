use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        page::Page,
        user::{CreateUserParams, UpdateUserParams},
    },
    service::user::{email_conflict_or_db, UserService},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod update;
