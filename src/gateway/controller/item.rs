use axum::{
    extract::{Path, Query, State},
    http::Method,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::WithRejection;
use garde::Validate;

use crate::{
    extract::SharerUserId,
    gateway::{
        error::GatewayError,
        state::GatewayState,
        validate::{NewComment, NewItem, Paging, SearchQuery},
    },
    model::item::{ItemDto, UpdateItemDto},
};

pub async fn get_owned_items(
    State(state): State<GatewayState>,
    SharerUserId(user_id): SharerUserId,
    WithRejection(Query(paging), _): WithRejection<Query<Paging>, GatewayError>,
) -> Result<Response, GatewayError> {
    paging.validate()?;

    state
        .server
        .request(Method::GET, "/items")
        .user(user_id)
        .query(&paging)
        .send()
        .await
}

pub async fn get_item(
    State(state): State<GatewayState>,
    SharerUserId(user_id): SharerUserId,
    WithRejection(Path(id), _): WithRejection<Path<i32>, GatewayError>,
) -> Result<Response, GatewayError> {
    state
        .server
        .request(Method::GET, &format!("/items/{}", id))
        .user(user_id)
        .send()
        .await
}

/// Forwards a search, answering blank text with an empty list directly.
pub async fn search_items(
    State(state): State<GatewayState>,
    SharerUserId(user_id): SharerUserId,
    WithRejection(Query(query), _): WithRejection<Query<SearchQuery>, GatewayError>,
) -> Result<Response, GatewayError> {
    query.validate()?;

    if query.text.trim().is_empty() {
        return Ok(Json(Vec::<ItemDto>::new()).into_response());
    }

    state
        .server
        .request(Method::GET, "/items/search")
        .user(user_id)
        .query(&query)
        .send()
        .await
}

pub async fn create_item(
    State(state): State<GatewayState>,
    SharerUserId(user_id): SharerUserId,
    WithRejection(Json(payload), _): WithRejection<Json<NewItem>, GatewayError>,
) -> Result<Response, GatewayError> {
    payload.validate()?;

    state
        .server
        .request(Method::POST, "/items")
        .user(user_id)
        .json(&payload)
        .send()
        .await
}

pub async fn update_item(
    State(state): State<GatewayState>,
    SharerUserId(user_id): SharerUserId,
    WithRejection(Path(id), _): WithRejection<Path<i32>, GatewayError>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateItemDto>, GatewayError>,
) -> Result<Response, GatewayError> {
    state
        .server
        .request(Method::PATCH, &format!("/items/{}", id))
        .user(user_id)
        .json(&payload)
        .send()
        .await
}

pub async fn delete_item(
    State(state): State<GatewayState>,
    SharerUserId(user_id): SharerUserId,
    WithRejection(Path(id), _): WithRejection<Path<i32>, GatewayError>,
) -> Result<Response, GatewayError> {
    state
        .server
        .request(Method::DELETE, &format!("/items/{}", id))
        .user(user_id)
        .send()
        .await
}

pub async fn add_comment(
    State(state): State<GatewayState>,
    SharerUserId(user_id): SharerUserId,
    WithRejection(Path(id), _): WithRejection<Path<i32>, GatewayError>,
    WithRejection(Json(payload), _): WithRejection<Json<NewComment>, GatewayError>,
) -> Result<Response, GatewayError> {
    payload.validate()?;

    state
        .server
        .request(Method::POST, &format!("/items/{}/comment", id))
        .user(user_id)
        .json(&payload)
        .send()
        .await
}
