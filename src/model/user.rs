use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateUserDto {
    pub name: String,
    pub email: String,
}

/// Partial update; absent fields keep their stored value.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateUserDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
