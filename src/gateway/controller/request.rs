use axum::{
    extract::{Path, Query, State},
    http::Method,
    response::Response,
    Json,
};
use axum_extra::extract::WithRejection;
use garde::Validate;

use crate::{
    extract::SharerUserId,
    gateway::{
        error::GatewayError,
        state::GatewayState,
        validate::{NewItemRequest, Paging},
    },
};

pub async fn create_request(
    State(state): State<GatewayState>,
    SharerUserId(user_id): SharerUserId,
    WithRejection(Json(payload), _): WithRejection<Json<NewItemRequest>, GatewayError>,
) -> Result<Response, GatewayError> {
    payload.validate()?;

    state
        .server
        .request(Method::POST, "/requests")
        .user(user_id)
        .json(&payload)
        .send()
        .await
}

pub async fn get_own_requests(
    State(state): State<GatewayState>,
    SharerUserId(user_id): SharerUserId,
) -> Result<Response, GatewayError> {
    state
        .server
        .request(Method::GET, "/requests")
        .user(user_id)
        .send()
        .await
}

pub async fn get_other_requests(
    State(state): State<GatewayState>,
    SharerUserId(user_id): SharerUserId,
    WithRejection(Query(paging), _): WithRejection<Query<Paging>, GatewayError>,
) -> Result<Response, GatewayError> {
    paging.validate()?;

    state
        .server
        .request(Method::GET, "/requests/all")
        .user(user_id)
        .query(&paging)
        .send()
        .await
}

pub async fn get_request(
    State(state): State<GatewayState>,
    SharerUserId(user_id): SharerUserId,
    WithRejection(Path(id), _): WithRejection<Path<i32>, GatewayError>,
) -> Result<Response, GatewayError> {
    state
        .server
        .request(Method::GET, &format!("/requests/{}", id))
        .user(user_id)
        .send()
        .await
}
