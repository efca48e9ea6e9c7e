use axum::{
    extract::{Path, Query, State},
    http::Method,
    response::Response,
    Json,
};
use axum_extra::extract::WithRejection;
use garde::Validate;

use crate::gateway::{
    error::GatewayError,
    state::GatewayState,
    validate::{NewUser, Paging, UserPatch},
};

pub async fn get_users(
    State(state): State<GatewayState>,
    WithRejection(Query(paging), _): WithRejection<Query<Paging>, GatewayError>,
) -> Result<Response, GatewayError> {
    paging.validate()?;

    state
        .server
        .request(Method::GET, "/users")
        .query(&paging)
        .send()
        .await
}

pub async fn get_user(
    State(state): State<GatewayState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, GatewayError>,
) -> Result<Response, GatewayError> {
    state
        .server
        .request(Method::GET, &format!("/users/{}", id))
        .send()
        .await
}

/// Forwards a user registration with a non-blank name and a well-formed email.
pub async fn create_user(
    State(state): State<GatewayState>,
    WithRejection(Json(payload), _): WithRejection<Json<NewUser>, GatewayError>,
) -> Result<Response, GatewayError> {
    payload.validate()?;

    state
        .server
        .request(Method::POST, "/users")
        .json(&payload)
        .send()
        .await
}

pub async fn update_user(
    State(state): State<GatewayState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, GatewayError>,
    WithRejection(Json(payload), _): WithRejection<Json<UserPatch>, GatewayError>,
) -> Result<Response, GatewayError> {
    payload.validate()?;

    state
        .server
        .request(Method::PATCH, &format!("/users/{}", id))
        .json(&payload)
        .send()
        .await
}

pub async fn delete_user(
    State(state): State<GatewayState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, GatewayError>,
) -> Result<Response, GatewayError> {
    state
        .server
        .request(Method::DELETE, &format!("/users/{}", id))
        .send()
        .await
}
