use std::str::FromStr;

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
        booking::{BookingDto, CreateBookingDto},
    },
    server::{
        error::AppError,
        model::{
            booking::{BookingDetails, BookingState, CreateBookingParams},
            page::{Page, DEFAULT_PAGE_SIZE},
        },
        service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Listing query: optional `state` filter plus paging.
#[derive(Deserialize)]
pub struct BookingListParams {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub from: u64,
    #[serde(default = "default_size")]
    pub size: u64,
}

fn default_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl BookingListParams {
    /// Parses the state filter (default `ALL`) and the paging window.
    fn parse(self) -> Result<(BookingState, Page), AppError> {
        let state = match self.state.as_deref() {
            Some(state) => BookingState::from_str(state)?,
            None => BookingState::default(),
        };

        Ok((state, Page::new(self.from, self.size)?))
    }
}

#[derive(Deserialize)]
pub struct ApprovalParams {
    pub approved: bool,
}

fn into_dtos(bookings: Vec<BookingDetails>) -> Vec<BookingDto> {
    bookings.into_iter().map(|booking| booking.into_dto()).collect()
}

/// Request a booking of another user's item.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user_id` - Booker from `X-Sharer-User-Id`
/// - `payload` - Item and rental window
///
/// # Returns
/// - `200 OK` - Created booking, status `WAITING`
/// - `400 Bad Request` - Item unavailable, invalid window, missing header or malformed body
/// - `404 Not Found` - Booker or item missing, or booker owns the item
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/bookings",
    tag = BOOKING_TAG,
    params(("X-Sharer-User-Id" = i32, Header, description = "Acting user id")),
    request_body = CreateBookingDto,
    responses(
        (status = 200, description = "Successfully created booking", body = BookingDto),
        (status = 400, description = "Item unavailable or invalid window", body = ErrorDto),
        (status = 404, description = "User or item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    WithRejection(Json(payload), _): WithRejection<Json<CreateBookingDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingService::new(&state.db)
        .create(CreateBookingParams::from_dto(user_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Approve or reject a waiting booking. Item owner only.
///
/// # Returns
/// - `200 OK` - Booking with its new status
/// - `400 Bad Request` - Booking already decided, missing header or `approved` flag
/// - `404 Not Found` - Booking missing or requester is not the item owner
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/bookings/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking id"),
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user id"),
        ("approved" = bool, Query, description = "`true` approves, `false` rejects")
    ),
    responses(
        (status = 200, description = "Successfully decided on booking", body = BookingDto),
        (status = 400, description = "Booking already decided", body = ErrorDto),
        (status = 404, description = "Booking not found or not owned", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_booking(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Query(params), _): WithRejection<Query<ApprovalParams>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingService::new(&state.db)
        .set_approval(id, user_id, params.approved)
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Get a booking as its booker or as the item owner.
///
/// # Returns
/// - `200 OK` - Booking found
/// - `400 Bad Request` - Missing header
/// - `404 Not Found` - Booking missing or not visible to the requester
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/bookings/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking id"),
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved booking", body = BookingDto),
        (status = 400, description = "Missing header", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingService::new(&state.db).get_by_id(id, user_id).await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// List the requester's own bookings, latest start first.
///
/// # Returns
/// - `200 OK` - Page of bookings matching `state`
/// - `400 Bad Request` - Unknown state, invalid paging or missing header
/// - `404 Not Found` - Requester does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/bookings",
    tag = BOOKING_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user id"),
        ("state" = Option<String>, Query, description = "ALL, PAST, FUTURE, CURRENT, WAITING or REJECTED (default: ALL)"),
        ("from" = Option<u64>, Query, description = "Offset of the first booking (default: 0)"),
        ("size" = Option<u64>, Query, description = "Bookings per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved bookings", body = Vec<BookingDto>),
        (status = 400, description = "Unknown state or invalid paging", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booker_bookings(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    WithRejection(Query(params), _): WithRejection<Query<BookingListParams>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let (booking_state, page) = params.parse()?;

    let bookings = BookingService::new(&state.db)
        .get_by_booker(user_id, booking_state, page)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(bookings))))
}

/// List bookings of items owned by the requester, latest start first.
///
/// # Returns
/// - `200 OK` - Page of bookings matching `state`
/// - `400 Bad Request` - Unknown state, invalid paging or missing header
/// - `404 Not Found` - Requester does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/bookings/owner",
    tag = BOOKING_TAG,
    params(
        ("X-Sharer-User-Id" = i32, Header, description = "Acting user id"),
        ("state" = Option<String>, Query, description = "ALL, PAST, FUTURE, CURRENT, WAITING or REJECTED (default: ALL)"),
        ("from" = Option<u64>, Query, description = "Offset of the first booking (default: 0)"),
        ("size" = Option<u64>, Query, description = "Bookings per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved bookings", body = Vec<BookingDto>),
        (status = 400, description = "Unknown state or invalid paging", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owner_bookings(
    State(state): State<AppState>,
    SharerUserId(user_id): SharerUserId,
    WithRejection(Query(params), _): WithRejection<Query<BookingListParams>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let (booking_state, page) = params.parse()?;

    let bookings = BookingService::new(&state.db)
        .get_by_owner(user_id, booking_state, page)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(bookings))))
}
