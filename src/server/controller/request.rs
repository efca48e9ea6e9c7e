use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    extract::SharerUserId,
    model::{
        api::ErrorDto,
        request::{CreateItemRequestDto, ItemRequestDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        model::request::{CreateItemRequestParams, ItemRequest},
        service::request::ItemRequestService,
        state::AppState,
    },
};

/// Tag for grouping item request endpoints in OpenAPI documentation
pub static REQUEST_TAG: &str = "request";

fn into_dtos(requests: Vec<ItemRequest>) -> Vec<ItemRequestDto> {
    requests.into_iter().map(|request| request.into_dto()).collect()
}

/// Ask for an item nobody has listed yet.
///
/// # Returns
/// - `200 OK` - Created request
/// - `400 Bad Request` - Missing header or malformed body
/// - `404 Not Found` - Requester does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/requests",
    tag = REQUEST_TAG,
    params(("X-Sharer-User-Id" = i32, Header, description = "Acting user id")),
    request_body = CreateItemRequestDto,
    responses(
        (status = 200, description = "Successfully created request", body = ItemRequestDto),
        (status = 400, description = "Missing header or malformed body", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_request(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    WithRejection(Json(payload), _): WithRejection<Json<CreateItemRequestDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let request = ItemRequestService::new(&state.db)
        .create(CreateItemRequestParams {
            creator_id: user_id,
            description: payload.description,
        })
        .await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// List the requester's own requests with the items offered for them, newest first.
///
/// # Returns
/// - `200 OK` - All own requests
/// - `400 Bad Request` - Missing header
/// - `404 Not Found` - Requester does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/requests",
    tag = REQUEST_TAG,
    params(("X-Sharer-User-Id" = i32, Header, description = "Acting user id")),
    responses(
        (status = 200, description = "Successfully retrieved requests", body = Vec<ItemRequestDto>),
        (status = 400, description = "Missing header", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_own_requests(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
) -> Result<impl IntoResponse, AppError> {
    let requests = ItemRequestService::new(&state.db).get_own(user_id).await?;

    Ok((StatusCode::OK, Json(into_dtos(requests))))
}

/// List other users' requests, newest first.
///
/// # Returns
/// - `200 OK` - Page of requests
/// - `400 Bad Request` - Missing header or invalid paging
/// - `404 Not Found` - Requester does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/requests/all",
    tag = REQUEST_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user id"),
        ("from" = Option<u64>, Query, description = "Offset of the first request (default: 0)"),
        ("size" = Option<u64>, Query, description = "Requests per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved requests", body = Vec<ItemRequestDto>),
        (status = 400, description = "Missing header or invalid paging", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_other_requests(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    WithRejection(Query(params), _): WithRejection<Query<PaginationParams>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let page = params.into_page()?;

    let requests = ItemRequestService::new(&state.db)
        .get_others(user_id, page)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(requests))))
}

/// Get any request by id.
///
/// # Returns
/// - `200 OK` - Request with offered items
/// - `400 Bad Request` - Missing header
/// - `404 Not Found` - Request or requester does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/requests/{id}",
    tag = REQUEST_TAG,
    params(
        ("id" = i32, Path, description = "Request id"),
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved request", body = ItemRequestDto),
        (status = 400, description = "Missing header", body = ErrorDto),
        (status = 404, description = "Request or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_request(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let request = ItemRequestService::new(&state.db).get_by_id(id, user_id).await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}
