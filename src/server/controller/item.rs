use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;

use crate::{
    extract::SharerUserId,
    model::{
        api::ErrorDto,
        item::{
            CommentDto, CreateCommentDto, CreateItemDto, ItemDetailsDto, ItemDto, UpdateItemDto,
        },
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        model::{
            comment::CreateCommentParams,
            item::{CreateItemParams, UpdateItemParams},
            page::{Page, DEFAULT_PAGE_SIZE},
        },
        service::item::ItemService,
        state::AppState,
    },
};

/// Tag for grouping item endpoints in OpenAPI documentation
pub static ITEM_TAG: &str = "item";

/// Search text plus paging.
#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub from: u64,
    #[serde(default = "default_size")]
    pub size: u64,
}

fn default_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

/// List the requester's items.
///
/// Each item carries its comments and the owner-only `lastBooking` / `nextBooking`.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user_id` - Acting user from `X-Sharer-User-Id`
/// - `params` - Paging window
///
/// # Returns
/// - `200 OK` - Page of owned items ordered by id
/// - `400 Bad Request` - Missing header or invalid paging
/// - `404 Not Found` - Requester does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/items",
    tag = ITEM_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user id"),
        ("from" = Option<u64>, Query, description = "Offset of the first item (default: 0)"),
        ("size" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved items", body = Vec<ItemDetailsDto>),
        (status = 400, description = "Missing header or invalid paging", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owned_items(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    WithRejection(Query(params), _): WithRejection<Query<PaginationParams>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let page = params.into_page()?;

    let items = ItemService::new(&state.db).get_owned(user_id, page).await?;

    let dtos: Vec<ItemDetailsDto> = items.into_iter().map(|item| item.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get an item with its comments.
///
/// Booking summaries are only filled in when the requester owns the item.
///
/// # Returns
/// - `200 OK` - Item found
/// - `400 Bad Request` - Missing header
/// - `404 Not Found` - Item or requester does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = ITEM_TAG,
    params(
        ("id" = i32, Path, description = "Item id"),
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved item", body = ItemDetailsDto),
        (status = 400, description = "Missing header", body = ErrorDto),
        (status = 404, description = "Item or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_item(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let item = ItemService::new(&state.db).get_by_id(id, user_id).await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Search available items by name or description.
///
/// Matching is case-insensitive; blank text yields an empty list.
///
/// # Returns
/// - `200 OK` - Page of matching available items
/// - `400 Bad Request` - Missing header or invalid paging
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/items/search",
    tag = ITEM_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user id"),
        ("text" = Option<String>, Query, description = "Text to look for"),
        ("from" = Option<u64>, Query, description = "Offset of the first item (default: 0)"),
        ("size" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully searched items", body = Vec<ItemDto>),
        (status = 400, description = "Missing header or invalid paging", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_items(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    WithRejection(Query(params), _): WithRejection<Query<SearchParams>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let page = Page::new(params.from, params.size)?;

    let items = ItemService::new(&state.db)
        .search(user_id, &params.text, page)
        .await?;

    let dtos: Vec<ItemDto> = items.into_iter().map(|item| item.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// List an item for sharing.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user_id` - Owner of the new item
/// - `payload` - Item fields, optionally answering an item request
///
/// # Returns
/// - `200 OK` - Created item
/// - `400 Bad Request` - Missing header or malformed body
/// - `404 Not Found` - Owner or referenced request does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/items",
    tag = ITEM_TAG,
    params(("X-Sharer-User-Id" = i32, Header, description = "Acting user id")),
    request_body = CreateItemDto,
    responses(
        (status = 200, description = "Successfully created item", body = ItemDto),
        (status = 400, description = "Missing header or malformed body", body = ErrorDto),
        (status = 404, description = "User or request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_item(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    WithRejection(Json(payload), _): WithRejection<Json<CreateItemDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let item = ItemService::new(&state.db)
        .create(CreateItemParams::from_dto(user_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Partially update an item. Owner only.
///
/// # Returns
/// - `200 OK` - Updated item
/// - `400 Bad Request` - Missing header or malformed body
/// - `404 Not Found` - Item missing or requester is not its owner
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/items/{id}",
    tag = ITEM_TAG,
    params(
        ("id" = i32, Path, description = "Item id"),
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user id")
    ),
    request_body = UpdateItemDto,
    responses(
        (status = 200, description = "Successfully updated item", body = ItemDto),
        (status = 400, description = "Missing header or malformed body", body = ErrorDto),
        (status = 404, description = "Item not found or not owned", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_item(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateItemDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let item = ItemService::new(&state.db)
        .update(UpdateItemParams::from_dto(id, user_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Delete an item. Owner only.
///
/// # Returns
/// - `200 OK` - Item deleted
/// - `400 Bad Request` - Missing header
/// - `404 Not Found` - Item missing or requester is not its owner
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = ITEM_TAG,
    params(
        ("id" = i32, Path, description = "Item id"),
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user id")
    ),
    responses(
        (status = 200, description = "Successfully deleted item"),
        (status = 400, description = "Missing header", body = ErrorDto),
        (status = 404, description = "Item not found or not owned", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_item(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    ItemService::new(&state.db).delete(id, user_id).await?;

    Ok(StatusCode::OK)
}

/// Comment on an item the requester has finished renting.
///
/// # Returns
/// - `200 OK` - Created comment
/// - `400 Bad Request` - No finished approved booking, missing header or malformed body
/// - `404 Not Found` - Item or author does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/items/{id}/comment",
    tag = ITEM_TAG,
    params(
        ("id" = i32, Path, description = "Item id"),
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user id")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 200, description = "Successfully created comment", body = CommentDto),
        (status = 400, description = "Author has not rented the item", body = ErrorDto),
        (status = 404, description = "Item or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_comment(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateCommentDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let comment = ItemService::new(&state.db)
        .add_comment(CreateCommentParams {
            item_id: id,
            author_id: user_id,
            text: payload.text,
        })
        .await?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}
