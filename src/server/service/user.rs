//! User service for business logic.
//!
//! This module provides the `UserService` for user registration and profile
//! management. It enforces email uniqueness and turns missing users into
//! `NotFound` errors while working with domain models rather than DTOs.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        page::Page,
        user::{CreateUserParams, UpdateUserParams, User},
    },
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves one page of users ordered by id.
    ///
    /// # Arguments
    /// - `page` - Offset window to return
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Users in the window, possibly empty
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self, page: Page) -> Result<Vec<User>, AppError> {
        let user_repo = UserRepository::new(self.db);

        Ok(user_repo.get_all_paginated(page.index(), page.size).await?)
    }

    /// Retrieves a user by id.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        user_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    /// Registers a new user.
    ///
    /// # Returns
    /// - `Ok(User)` - Created user
    /// - `Err(AppError::Conflict)` - Email already registered, in any letter case,
    ///   including by a concurrent insert that wins the unique index
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&params.email).await?.is_some() {
            return Err(email_taken(&params.email));
        }

        let email = params.email.clone();
        user_repo
            .create(params)
            .await
            .map_err(|err| email_conflict_or_db(err, &email))
    }

    /// Applies a partial update to a user.
    ///
    /// Changing the email to the one the user already has is not a conflict.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::NotFound)` - No user with `params.id`
    /// - `Err(AppError::Conflict)` - New email belongs to another user
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, params: UpdateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if !user_repo.exists(params.id).await? {
            return Err(user_not_found(params.id));
        }

        if let Some(email) = &params.email {
            if let Some(owner) = user_repo.find_by_email(email).await? {
                if owner.id != params.id {
                    return Err(email_taken(email));
                }
            }
        }

        let email = params.email.clone().unwrap_or_default();
        user_repo
            .update(params)
            .await
            .map_err(|err| email_conflict_or_db(err, &email))
    }

    /// Deletes a user together with everything they own.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        if !user_repo.delete(id).await? {
            return Err(user_not_found(id));
        }

        Ok(())
    }

    /// Fails with `NotFound` unless a user with `id` exists.
    ///
    /// Used by the other services to validate the acting user.
    pub async fn ensure_exists(&self, id: i32) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        if !user_repo.exists(id).await? {
            return Err(user_not_found(id));
        }

        Ok(())
    }
}

fn user_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("User with id {} not found", id))
}

fn email_taken(email: &str) -> AppError {
    AppError::Conflict(format!("Email {} is already registered", email))
}

/// Maps a unique index violation on write to `Conflict`, passing other errors through.
///
/// Covers the race where another request registers the same email between the
/// lookup and the write.
pub(super) fn email_conflict_or_db(err: DbErr, email: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => email_taken(email),
        _ => AppError::DbErr(err),
    }
}
