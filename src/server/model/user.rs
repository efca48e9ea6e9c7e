//! User domain models and parameters.

use crate::model::user::{CreateUserDto, UpdateUserDto, UserDto};

/// Registered user of the marketplace.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Parameters for registering a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
        }
    }
}

/// Parameters for a partial user update.
///
/// `None` fields keep their stored value.
#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UpdateUserParams {
    pub fn from_dto(id: i32, dto: UpdateUserDto) -> Self {
        Self {
            id,
            name: dto.name,
            email: dto.email,
        }
    }
}
