use axum::{
    extract::{Path, Query, State},
    http::Method,
    response::Response,
    Json,
};
use axum_extra::extract::WithRejection;
use chrono::Utc;
use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::{
    extract::SharerUserId,
    gateway::{
        error::GatewayError,
        state::GatewayState,
        validate::{booking_state, BookingListQuery, NewBooking},
    },
};

#[derive(Deserialize, Serialize)]
pub struct ApprovalQuery {
    pub approved: bool,
}

/// Validates a listing query into the query string sent to the server.
fn listing_query(query: BookingListQuery) -> Result<[(&'static str, String); 3], GatewayError> {
    query.validate()?;
    let state = booking_state(query.state.as_deref())?;

    Ok([
        ("state", state.to_string()),
        ("from", query.from.to_string()),
        ("size", query.size.to_string()),
    ])
}

/// Forwards a booking whose window starts now or later and ends after it starts.
pub async fn create_booking(
    State(state): State<GatewayState>,
    SharerUserId(user_id): SharerUserId,
    WithRejection(Json(payload), _): WithRejection<Json<NewBooking>, GatewayError>,
) -> Result<Response, GatewayError> {
    payload.validate_with(&Utc::now().naive_utc())?;

    state
        .server
        .request(Method::POST, "/bookings")
        .user(user_id)
        .json(&payload)
        .send()
        .await
}

pub async fn approve_booking(
    State(state): State<GatewayState>,
    SharerUserId(user_id): SharerUserId,
    WithRejection(Path(id), _): WithRejection<Path<i32>, GatewayError>,
    WithRejection(Query(query), _): WithRejection<Query<ApprovalQuery>, GatewayError>,
) -> Result<Response, GatewayError> {
    state
        .server
        .request(Method::PATCH, &format!("/bookings/{}", id))
        .user(user_id)
        .query(&query)
        .send()
        .await
}

pub async fn get_booking(
    State(state): State<GatewayState>,
    SharerUserId(user_id): SharerUserId,
    WithRejection(Path(id), _): WithRejection<Path<i32>, GatewayError>,
) -> Result<Response, GatewayError> {
    state
        .server
        .request(Method::GET, &format!("/bookings/{}", id))
        .user(user_id)
        .send()
        .await
}

pub async fn get_booker_bookings(
    State(state): State<GatewayState>,
    SharerUserId(user_id): SharerUserId,
    WithRejection(Query(query), _): WithRejection<Query<BookingListQuery>, GatewayError>,
) -> Result<Response, GatewayError> {
    let query = listing_query(query)?;

    state
        .server
        .request(Method::GET, "/bookings")
        .user(user_id)
        .query(&query)
        .send()
        .await
}

pub async fn get_owner_bookings(
    State(state): State<GatewayState>,
    SharerUserId(user_id): SharerUserId,
    WithRejection(Query(query), _): WithRejection<Query<BookingListQuery>, GatewayError>,
) -> Result<Response, GatewayError> {
    let query = listing_query(query)?;

    state
        .server
        .request(Method::GET, "/bookings/owner")
        .user(user_id)
        .query(&query)
        .send()
        .await
}
