//! Comment factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a comment on `item_id` written by `author_id`.
///
/// # Returns
/// - `Ok(entity::comment::Model)` - Created comment with text `"Comment {n}"`
/// - `Err(DbErr)` - Database error during insert
pub async fn create_comment(
    db: &DatabaseConnection,
    item_id: i32,
    author_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    entity::comment::ActiveModel {
        id: ActiveValue::NotSet,
        text: ActiveValue::Set(format!("Comment {}", next_id())),
        item_id: ActiveValue::Set(item_id),
        author_id: ActiveValue::Set(author_id),
        created: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
