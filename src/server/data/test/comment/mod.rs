use crate::server::{data::comment::CommentRepository, model::comment::CreateCommentParams};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
