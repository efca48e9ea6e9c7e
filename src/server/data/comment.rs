//! Comment data repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::comment::{Comment, CreateCommentParams};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a comment stamped with `created` and returns it with the author's name.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment
    /// - `Err(DbErr::RecordNotFound)` - Author does not exist
    /// - `Err(DbErr)` - Other database error
    pub async fn create(
        &self,
        params: CreateCommentParams,
        created: DateTime<Utc>,
    ) -> Result<Comment, DbErr> {
        let author = entity::prelude::User::find_by_id(params.author_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "User {} not found",
                params.author_id
            )))?;

        let entity = entity::comment::ActiveModel {
            text: ActiveValue::Set(params.text),
            item_id: ActiveValue::Set(params.item_id),
            author_id: ActiveValue::Set(params.author_id),
            created: ActiveValue::Set(created),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(entity, author.name))
    }

    /// Gets the comments of the given items, oldest first.
    pub async fn get_by_item_ids(&self, item_ids: Vec<i32>) -> Result<Vec<Comment>, DbErr> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = entity::prelude::Comment::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::comment::Column::ItemId.is_in(item_ids))
            .order_by_asc(entity::comment::Column::Created)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(comment, author)| {
                let author_name = author.map(|a| a.name).unwrap_or_default();
                Comment::from_entity(comment, author_name)
            })
            .collect())
    }
}
