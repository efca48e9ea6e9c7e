//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user creation, updates, lookups and deletion with conversion from entity
//! models to domain models at the infrastructure boundary.

use sea_orm::{
    sea_query::{self, Expr, Func},
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParams, UpdateUserParams, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `params` - Name and email of the user
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with its generated id
    /// - `Err(DbErr)` - Database error, including unique email violations
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email, ignoring case.
    ///
    /// # Arguments
    /// - `email` - Email address to look up
    ///
    /// # Returns
    /// - `Ok(Some(User))` - A user registered with this address in any letter case
    /// - `Ok(None)` - Address not taken
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(sea_query::ExprTrait::eq(
                Expr::expr(Func::lower(Expr::col(entity::user::Column::Email))),
                email.to_lowercase(),
            ))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Gets one page of users ordered by id.
    ///
    /// # Arguments
    /// - `page` - Page number (0-indexed)
    /// - `per_page` - Number of users per page
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Users on the requested page, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_paginated(&self, page: u64, per_page: u64) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, per_page)
            .fetch_page(page)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Applies a partial update to an existing user.
    ///
    /// Fields left as `None` in `params` keep their stored value.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotFound)` - No user with `params.id`
    /// - `Err(DbErr)` - Other database error
    pub async fn update(&self, params: UpdateUserParams) -> Result<User, DbErr> {
        let user = entity::prelude::User::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("User {} not found", params.id)))?;

        let mut active_model: entity::user::ActiveModel = user.into();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(email);
        }

        let entity = active_model.update(self.db).await?;

        Ok(User::from_entity(entity))
    }

    /// Deletes a user by id, cascading to their items, bookings, requests and comments.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether a user with the given id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }
}
