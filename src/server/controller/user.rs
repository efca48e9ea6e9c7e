use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        model::user::{CreateUserParams, UpdateUserParams},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List users.
///
/// Returns users ordered by id, one page at a time.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Paging window (`from` offset and page `size`)
///
/// # Returns
/// - `200 OK` - Page of users
/// - `400 Bad Request` - Invalid paging parameters
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    params(
        ("from" = Option<u64>, Query, description = "Offset of the first user (default: 0)"),
        ("size" = Option<u64>, Query, description = "Users per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved users", body = Vec<UserDto>),
        (status = 400, description = "Invalid paging parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    WithRejection(Query(params), _): WithRejection<Query<PaginationParams>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let page = params.into_page()?;

    let users = UserService::new(&state.db).get_all(page).await?;

    let dtos: Vec<UserDto> = users.into_iter().map(|user| user.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a user by id.
///
/// # Returns
/// - `200 OK` - User found
/// - `404 Not Found` - No user with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Successfully retrieved user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Register a user.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Name and email of the new user
///
/// # Returns
/// - `200 OK` - Created user
/// - `400 Bad Request` - Malformed body
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "Successfully created user", body = UserDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateUserDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .create(CreateUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Partially update a user.
///
/// Only the fields present in the body are changed.
///
/// # Returns
/// - `200 OK` - Updated user
/// - `404 Not Found` - No user with this id
/// - `409 Conflict` - New email belongs to another user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Successfully updated user", body = UserDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateUserDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .update(UpdateUserParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user together with everything they own.
///
/// # Returns
/// - `200 OK` - User deleted
/// - `404 Not Found` - No user with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Successfully deleted user"),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.db).delete(id).await?;

    Ok(StatusCode::OK)
}
